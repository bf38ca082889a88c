//! Stable error codes for callers that cross a language boundary.

/// Every error enum implements this to expose a structured code string.
pub trait InertiaErrorCode {
    /// Returns the code string (e.g., "INVALID_PARAMETER").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_PARAMETER: &str = "INVALID_PARAMETER";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const UNKNOWN_VARIANT: &str = "UNKNOWN_VARIANT";
pub const UNKNOWN_LOCALE: &str = "UNKNOWN_LOCALE";
