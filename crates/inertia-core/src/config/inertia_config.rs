//! Top-level configuration with file and environment resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ObservabilityConfig, ScoringConfig, SimulationConfig};
use crate::errors::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`INERTIA_*`)
/// 2. Config file passed to [`InertiaConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct InertiaConfig {
    pub simulation: SimulationConfig,
    pub scoring: ScoringConfig,
    pub observability: ObservabilityConfig,
}

impl InertiaConfig {
    /// Load from an optional TOML file, then apply env overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        Self::apply_env_overrides(&mut config);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()?;
        self.scoring.validate()?;
        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut InertiaConfig) {
        if let Ok(val) = std::env::var("INERTIA_MAX_MONTHS") {
            if let Ok(v) = val.parse::<u32>() {
                config.simulation.max_months = v;
            }
        }
        if let Ok(val) = std::env::var("INERTIA_LOCALE") {
            if let Ok(v) = val.parse() {
                config.simulation.locale = v;
            }
        }
        if let Ok(val) = std::env::var("INERTIA_DEFAULT_VISIBILITY") {
            if let Ok(v) = val.parse::<u8>() {
                config.scoring.default_visibility = v;
            }
        }
        if let Ok(val) = std::env::var("INERTIA_LOG_LEVEL") {
            config.observability.log_level = val.to_ascii_lowercase();
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
