//! Trial configuration.
//!
//! This module defines the configuration consumed when setting up a
//! simulation trial. It provides:
//! 1. **Defaults:** Baseline constants for randomness and estimation.
//! 2. **Structure:** A serde-deserializable [`SimConfig`] so host
//!    applications configure trials from JSON.
//!
//! Use `SimConfig::default()` for an entropy-seeded trial, or set `seed` for
//! a reproducible one.

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    /// Default estimation window length in samples.
    ///
    /// Long enough that the windowed average of a Bernoulli stream settles
    /// to within a few percent of the encoded value.
    pub const ESTIMATE_WINDOW: usize = 5000;
}

/// Configuration for one simulation trial.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seed for the trial's randomness sources.
    ///
    /// `None` seeds from OS entropy. Parallel trials must use distinct
    /// seeds to avoid inter-trial correlation in generated samples.
    pub seed: Option<u64>,

    /// Window length for running-average estimators.
    pub estimate_window: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            estimate_window: defaults::ESTIMATE_WINDOW,
        }
    }
}
