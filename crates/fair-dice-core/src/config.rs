//! Session configuration.
//!
//! Values come from the environment and fall back to defaults when a
//! variable is missing or unparsable. `validate` enforces the bounds.

use crate::error::{FrgError, Result};

/// Decimal places shown in the probability table
pub const DEFAULT_PRECISION: usize = 4;
/// Consecutive invalid inputs before the console gives up on the user
pub const DEFAULT_MAX_INVALID_INPUTS: usize = 5;

pub const PRECISION_ENV: &str = "FAIR_DICE_PRECISION";
pub const MAX_INVALID_INPUTS_ENV: &str = "FAIR_DICE_MAX_INVALID_INPUTS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub probability_precision: usize,
    pub max_invalid_inputs: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            probability_precision: DEFAULT_PRECISION,
            max_invalid_inputs: DEFAULT_MAX_INVALID_INPUTS,
        }
    }
}

impl GameConfig {
    /// Load from `FAIR_DICE_PRECISION` and `FAIR_DICE_MAX_INVALID_INPUTS`
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse = |name: &str, default: usize| {
            lookup(name)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };
        Self {
            probability_precision: parse(PRECISION_ENV, DEFAULT_PRECISION),
            max_invalid_inputs: parse(MAX_INVALID_INPUTS_ENV, DEFAULT_MAX_INVALID_INPUTS),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=10).contains(&self.probability_precision) {
            return Err(FrgError::config(format!(
                "probability precision must be 1..=10, got {}",
                self.probability_precision
            )));
        }
        if self.max_invalid_inputs == 0 {
            return Err(FrgError::config("max invalid inputs must be at least 1"));
        }
        Ok(())
    }
}
