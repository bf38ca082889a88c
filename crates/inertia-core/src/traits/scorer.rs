use crate::models::ScoreBreakdown;
use crate::params::AgentParameters;

/// Deterministic inertia scoring.
pub trait IInertiaScorer: Send + Sync {
    /// Integer-scale composite score. Never fails for valid parameters.
    fn compute_inertia_score(&self, params: &AgentParameters) -> ScoreBreakdown;
}
