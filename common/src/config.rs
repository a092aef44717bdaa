//! Where the on-hands sheet lives and how to reach it.
//!
//! Values come from a TOML file, then `ONHANDS_*` environment variables
//! override individual keys. Every key has a default, so a missing file at the
//! default location is not an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const ENV_SPREADSHEET_ID: &str = "ONHANDS_SPREADSHEET_ID";
pub const ENV_TAB: &str = "ONHANDS_TAB";
pub const ENV_CREDENTIALS: &str = "ONHANDS_CREDENTIALS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Key of the Google spreadsheet holding the on-hands tab.
    #[serde(default = "default_spreadsheet_id")]
    pub spreadsheet_id: String,

    /// Title of the tab (worksheet) inside the spreadsheet.
    #[serde(default = "default_tab_name")]
    pub tab_name: String,

    /// Service account key file, as downloaded from the Google Cloud console.
    #[serde(default = "default_credentials")]
    pub credentials: PathBuf,
}

fn default_spreadsheet_id() -> String {
    "1IR6rCNQYFccBrc_cxNVv2gEQnVpecEAo58IDRJYWNlo".to_string()
}

fn default_tab_name() -> String {
    "On-hands".to_string()
}

/// Same location gspread reads its service account from.
fn default_credentials() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("gspread")
        .join("service_account.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spreadsheet_id: default_spreadsheet_id(),
            tab_name: default_tab_name(),
            credentials: default_credentials(),
        }
    }
}

impl Config {
    /// `<config dir>/onhands/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("onhands").join("config.toml"))
    }

    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, the default path is tried
    /// and silently skipped if absent. Environment overrides apply last.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    debug!("no config file found, using defaults");
                    Self::default()
                }
            },
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Applies overrides from `lookup` (normally the process environment).
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(id) = lookup(ENV_SPREADSHEET_ID) {
            self.spreadsheet_id = id;
        }
        if let Some(tab) = lookup(ENV_TAB) {
            self.tab_name = tab;
        }
        if let Some(credentials) = lookup(ENV_CREDENTIALS) {
            self.credentials = PathBuf::from(credentials);
        }
        self
    }
}
