//! Configuration module for Roshambo.
//!
//! Configuration is loaded from environment variables (a `.env` file is honoured by
//! the binaries), organized by concern: Storage and Model.

mod model_config;
mod storage_config;

pub use model_config::ModelEnvConfig;
pub use storage_config::{DEFAULT_HISTORY_FILE, DEFAULT_MODEL_FILE, StorageEnvConfig};

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Variable lookup, `std::env::var` in production and a closure in tests.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub storage: StorageEnvConfig,
    pub model: ModelEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(&|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self> {
        Ok(Self {
            storage: StorageEnvConfig::from_lookup(lookup),
            model: ModelEnvConfig::from_lookup(lookup).context("Failed to load model config")?,
        })
    }
}

pub(crate) fn parse_optional<T>(lookup: EnvLookup<'_>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Failed to parse {}={}", key, raw)),
        _ => Ok(None),
    }
}
