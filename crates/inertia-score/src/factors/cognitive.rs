use inertia_core::AgentParameters;

/// Cognitive bias load.
///
/// Formula: `(procrastination + pessimism + lossAversion + avoidance) × 2.5`
/// Range: 0 – 100.
pub fn calculate(params: &AgentParameters) -> f64 {
    let sum = u32::from(params.procrastination())
        + u32::from(params.pessimism())
        + u32::from(params.loss_aversion())
        + u32::from(params.avoidance());
    f64::from(sum) * 2.5
}
