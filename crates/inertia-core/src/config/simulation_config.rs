use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_MONTHS;
use crate::errors::ConfigError;
use crate::models::NarrativeLocale;

/// Simulation engine configuration. Defaults reproduce the reference model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Months simulated before the run is declared indefinitely postponed.
    /// At most 12.
    pub max_months: u32,
    /// Progress at or above this ends the run in success.
    pub success_threshold: i32,
    /// Progress at or below this ends the run in failure.
    pub failure_threshold: i32,
    /// Language of the rendered narrative.
    pub locale: NarrativeLocale,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_months: defaults::DEFAULT_MAX_MONTHS,
            success_threshold: defaults::DEFAULT_SUCCESS_THRESHOLD,
            failure_threshold: defaults::DEFAULT_FAILURE_THRESHOLD,
            locale: NarrativeLocale::default(),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_months == 0 || self.max_months > MAX_MONTHS {
            return Err(ConfigError::ValidationFailed {
                field: "simulation.max_months".to_string(),
                message: format!("must be between 1 and {MAX_MONTHS}"),
            });
        }
        if self.success_threshold <= 0 {
            return Err(ConfigError::ValidationFailed {
                field: "simulation.success_threshold".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if self.failure_threshold >= 0 {
            return Err(ConfigError::ValidationFailed {
                field: "simulation.failure_threshold".to_string(),
                message: "must be negative".to_string(),
            });
        }
        Ok(())
    }
}
