//! Output formats for resolved data.

mod html;
mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

use aule_core::AuleError;

/// Message shown to the user in place of the data.
pub fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<AuleError>() {
        Some(AuleError::DataUnavailable { .. }) => {
            "Errore nel reperire i dati all'interno delle APIs.".to_string()
        }
        Some(AuleError::Request(_)) => "Errore nel contattare le APIs.".to_string(),
        _ => format!("{err:#}"),
    }
}
