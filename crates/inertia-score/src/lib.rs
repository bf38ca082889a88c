//! # inertia-score
//!
//! Deterministic inertia scoring, independent of any simulation outcome.
//! Two named variants:
//! - `scaled`: integer-scale cognitive + circumstantial + structural sum,
//!   multiplied by a backstage-visibility amplifier.
//! - `weighted_average`: continuous-scale 0.4/0.3/0.3 weighted average.

pub mod engine;
pub mod factors;
pub mod formula;
pub mod variant;
pub mod weighted;

pub use engine::{compute_inertia_score, ScoreEngine};
pub use variant::ScoringVariant;
