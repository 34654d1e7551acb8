//! Storage configuration parsing from environment variables.
//!
//! Locations of the history CSV and the persisted model.

use super::EnvLookup;
use std::path::PathBuf;

pub const DEFAULT_HISTORY_FILE: &str = "data/history.csv";
pub const DEFAULT_MODEL_FILE: &str = "data/model.json";

/// Storage environment configuration
#[derive(Debug, Clone, PartialEq)]
pub struct StorageEnvConfig {
    pub history_file: PathBuf,
    pub model_file: PathBuf,
}

impl Default for StorageEnvConfig {
    fn default() -> Self {
        Self {
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            model_file: PathBuf::from(DEFAULT_MODEL_FILE),
        }
    }
}

impl StorageEnvConfig {
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        let defaults = Self::default();
        let path = |key: &str| {
            lookup(key)
                .filter(|raw| !raw.trim().is_empty())
                .map(|raw| PathBuf::from(raw.trim()))
        };
        Self {
            history_file: path("HISTORY_FILE").unwrap_or(defaults.history_file),
            model_file: path("MODEL_FILE").unwrap_or(defaults.model_file),
        }
    }
}
