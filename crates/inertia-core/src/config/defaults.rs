// Single source of truth for all default values.

use crate::constants;

// --- Simulation ---
pub const DEFAULT_MAX_MONTHS: u32 = constants::MAX_MONTHS;
pub const DEFAULT_SUCCESS_THRESHOLD: i32 = constants::SUCCESS_THRESHOLD;
pub const DEFAULT_FAILURE_THRESHOLD: i32 = constants::FAILURE_THRESHOLD;

// --- Scoring ---
pub const DEFAULT_VISIBILITY_OF_BACKSTAGE: u8 = 5;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
