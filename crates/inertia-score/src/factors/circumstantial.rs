use inertia_core::constants::PARAM_MAX;
use inertia_core::AgentParameters;

/// Circumstantial load. External pressure counts inversely: less pressure,
/// more inertia.
///
/// Formula: `(scarcity + (10 - pressure)) × 5`
/// Range: 0 – 100.
pub fn calculate(params: &AgentParameters) -> f64 {
    let absent_pressure = PARAM_MAX - i32::from(params.pressure());
    f64::from(i32::from(params.scarcity()) + absent_pressure) * 5.0
}
