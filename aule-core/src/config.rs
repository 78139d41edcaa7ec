//! aule configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AuleError, AuleResult};
use crate::pole::DEFAULT_POLE_PAGE;

static DEFAULT_BASE_URL: &str = "https://vps.giulionisi.me:54321/api/";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Environment variable overriding `base_url`.
pub const BASE_URL_ENV: &str = "AULE_BASE_URL";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_pole_page() -> String {
    DEFAULT_POLE_PAGE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Configuration at ~/.config/aule/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AuleConfig {
    /// Root of the classrooms API, e.g. "https://host:54321/api/"
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Page the pole list links to
    #[serde(default = "default_pole_page")]
    pub pole_page: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AuleConfig {
    fn default() -> Self {
        AuleConfig {
            base_url: default_base_url(),
            pole_page: default_pole_page(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AuleConfig {
    pub fn config_path() -> AuleResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AuleError::Config("Could not determine config directory".into()))?
            .join("aule");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file (defaults when absent), then apply `AULE_BASE_URL`.
    pub fn load() -> AuleResult<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.base_url = base_url;
        }

        Ok(config)
    }

    pub fn load_from(path: &Path) -> AuleResult<Self> {
        if !path.exists() {
            return Ok(AuleConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| AuleError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> AuleResult<()> {
        let contents = format!(
            "\
# aule configuration

# Root of the classrooms API:
# base_url = \"{}\"

# Page the pole list links to:
# pole_page = \"{}\"

# Request timeout, in seconds:
# timeout_secs = {}
",
            DEFAULT_BASE_URL, DEFAULT_POLE_PAGE, DEFAULT_TIMEOUT_SECS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AuleError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AuleError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of `endpoint`, with `pole_name` as query parameter when given.
    pub fn endpoint_url(&self, endpoint: &str, pole_name: Option<&str>) -> AuleResult<Url> {
        // Url::join drops the last path segment unless the base ends in '/'
        let mut base = self.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }

        let mut url = Url::parse(&base)
            .and_then(|b| b.join(endpoint))
            .map_err(|e| AuleError::Config(format!("Invalid base_url '{}': {e}", self.base_url)))?;

        if let Some(pole) = pole_name {
            url.query_pairs_mut().append_pair("pole_name", pole);
        }

        Ok(url)
    }
}
