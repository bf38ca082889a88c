//! Subscriber installation. Kept in its own test binary: the global
//! subscriber can only be set once per process.

use inertia_core::config::ObservabilityConfig;
use inertia_core::tracing_setup::{self, events};
use inertia_core::Outcome;

#[test]
fn subscriber_installs_once_per_process() {
    assert!(tracing_setup::init_from_config(&ObservabilityConfig::default()));

    // Events go through the installed subscriber without panicking.
    events::simulation_started(12);
    events::simulation_completed(Outcome::Success, 3, 8);
    events::batch_completed(1, 1, 0, 0);

    assert!(!tracing_setup::init_tracing());
    assert!(!tracing_setup::init_tracing_with_filter("debug"));
    assert!(!tracing_setup::init_from_config(&ObservabilityConfig::default()));
}
