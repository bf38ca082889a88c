use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::PARAM_MAX;
use crate::errors::ConfigError;

/// Score aggregator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Backstage visibility assumed when a profile does not carry one.
    pub default_visibility: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_visibility: defaults::DEFAULT_VISIBILITY_OF_BACKSTAGE,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if i32::from(self.default_visibility) > PARAM_MAX {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.default_visibility".to_string(),
                message: format!("must be between 0 and {PARAM_MAX}"),
            });
        }
        Ok(())
    }
}
