use super::config_error::ConfigError;
use super::error_code::{self, InertiaErrorCode};

/// Top-level error for the inertia model.
#[derive(Debug, thiserror::Error)]
pub enum InertiaError {
    #[error("invalid parameter {field}: {value} is outside [{min}, {max}]")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unknown scoring variant: {name}")]
    UnknownVariant { name: String },

    #[error("unsupported narrative locale: {name}")]
    UnknownLocale { name: String },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type InertiaResult<T> = Result<T, InertiaError>;

impl InertiaErrorCode for InertiaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidParameter { .. } => error_code::INVALID_PARAMETER,
            Self::UnknownVariant { .. } => error_code::UNKNOWN_VARIANT,
            Self::UnknownLocale { .. } => error_code::UNKNOWN_LOCALE,
            Self::Config(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}
