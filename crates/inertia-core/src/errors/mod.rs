//! Error handling for the inertia model.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod inertia_error;

pub use config_error::ConfigError;
pub use error_code::InertiaErrorCode;
pub use inertia_error::{InertiaError, InertiaResult};
