//! Error types for aule.

use thiserror::Error;

/// Errors that can occur in aule operations.
#[derive(Error, Debug)]
pub enum AuleError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The API answered without the field we asked for. `message` is the
    /// server's own explanation, when it sent one.
    #[error("Data unavailable: missing '{field}'{}", server_message(.message))]
    DataUnavailable {
        field: String,
        message: Option<String>,
    },

    #[error("Malformed annotation: '{0}'")]
    MalformedAnnotation(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

fn server_message(message: &Option<String>) -> String {
    message
        .as_ref()
        .map(|m| format!(" ({m})"))
        .unwrap_or_default()
}

/// Result type alias for aule operations.
pub type AuleResult<T> = Result<T, AuleError>;
