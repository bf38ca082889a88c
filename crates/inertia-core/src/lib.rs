//! # inertia-core
//!
//! Foundation crate for the decision inertia model.
//! Defines parameter types, result models, narrative tables, traits, errors,
//! config, constants, and tracing setup. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod params;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::InertiaConfig;
pub use errors::{InertiaError, InertiaResult};
pub use models::{
    InertiaScore, MonthEntry, MonthEvent, NarrativeLocale, Outcome, ScoreBreakdown,
    SimulationResult, WeightedScore,
};
pub use params::{AgentParameters, ContinuousParameters};
pub use traits::RandomSource;
