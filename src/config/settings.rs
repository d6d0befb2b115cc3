//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{DEFAULT_DATA_DIR, DEFAULT_STORAGE_NAMESPACE};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory of the file-backed storage port
    pub data_dir: PathBuf,
    /// Prefix applied to every storage key
    pub storage_namespace: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            data_dir: env::var("HAMRO_DATA_DIR")
                .unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string())
                .into(),
            storage_namespace: env::var("HAMRO_STORAGE_NAMESPACE")
                .unwrap_or_else(|_| DEFAULT_STORAGE_NAMESPACE.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage_namespace: DEFAULT_STORAGE_NAMESPACE.to_string(),
        }
    }
}
