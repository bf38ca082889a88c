//! Tracing setup: structured logging and event helpers.

pub mod events;

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `INERTIA_LOG` environment variable for filtering and
/// defaults to `info`. Returns false if a global subscriber already exists.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env("INERTIA_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init()
        .is_ok()
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    let filter = EnvFilter::new(filter);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}

/// Initialize tracing at the level named in the config.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    init_tracing_with_filter(&config.log_level)
}
