//! Model configuration parsing from environment variables.
//!
//! Random forest hyper-parameters and the seed of the random fallback.

use super::{EnvLookup, parse_optional};
use crate::application::ml::ForestSettings;
use anyhow::Result;

/// Model environment configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelEnvConfig {
    pub forest: ForestSettings,
    /// Seed for the random fallback; `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl ModelEnvConfig {
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self> {
        let defaults = ForestSettings::default();
        let forest = ForestSettings {
            n_trees: parse_optional(lookup, "FOREST_N_TREES")?.unwrap_or(defaults.n_trees),
            max_depth: parse_optional(lookup, "FOREST_MAX_DEPTH")?,
            min_samples_split: parse_optional(lookup, "FOREST_MIN_SAMPLES_SPLIT")?
                .unwrap_or(defaults.min_samples_split),
            seed: parse_optional(lookup, "FOREST_SEED")?.unwrap_or(defaults.seed),
        };
        if forest.n_trees == 0 {
            anyhow::bail!("FOREST_N_TREES must be at least 1");
        }

        Ok(Self {
            forest,
            rng_seed: parse_optional(lookup, "ENGINE_RNG_SEED")?,
        })
    }
}
