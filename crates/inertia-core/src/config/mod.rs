//! Configuration for the inertia model.
//! TOML-based, resolved as: env > file > compiled defaults.

pub mod defaults;
pub mod inertia_config;
pub mod observability_config;
pub mod scoring_config;
pub mod simulation_config;

pub use inertia_config::InertiaConfig;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::ScoringConfig;
pub use simulation_config::SimulationConfig;
