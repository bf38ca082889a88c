/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound of every integer-scale bias parameter.
pub const PARAM_MIN: i32 = 0;

/// Upper bound of every integer-scale bias parameter.
pub const PARAM_MAX: i32 = 10;

/// Bounds of the continuous-scale parameters.
pub const CONTINUOUS_MIN: f64 = 0.0;
pub const CONTINUOUS_MAX: f64 = 1.0;

/// Slider default for every bias in the interactive front end.
pub const DEFAULT_BIAS_LEVEL: u8 = 5;

/// Hard cap on simulated months per run.
pub const MAX_MONTHS: u32 = 12;

/// Progress at or above this value ends the run in success.
pub const SUCCESS_THRESHOLD: i32 = 8;

/// Progress at or below this value ends the run in failure.
pub const FAILURE_THRESHOLD: i32 = -5;

/// Upper bound on random draws in one month: five guards, pressure, loss aversion.
pub const MAX_DRAWS_PER_MONTH: usize = 7;
