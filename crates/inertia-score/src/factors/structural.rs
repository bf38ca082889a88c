use inertia_core::AgentParameters;

/// Structural invisibilisation. Formula: `invisibilisation × 10`, range 0 – 100.
pub fn calculate(params: &AgentParameters) -> f64 {
    f64::from(params.invisibilisation()) * 10.0
}
