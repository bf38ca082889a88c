use crate::models::SimulationResult;
use crate::params::AgentParameters;
use crate::traits::RandomSource;

/// Month-by-month decision simulation.
pub trait IDecisionSimulator: Send + Sync {
    /// Run one simulation, consuming draws from `rng` strictly in order.
    fn simulate(&self, params: &AgentParameters, rng: &mut dyn RandomSource) -> SimulationResult;
}
