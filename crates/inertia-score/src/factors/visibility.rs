use inertia_core::constants::PARAM_MAX;
use inertia_core::AgentParameters;

/// Amplifier added per point of missing backstage visibility.
pub const AMPLIFIER_STEP: f64 = 0.05;

/// Visibility amplifier.
///
/// Formula: `1 + (10 - visibilityOfBackstage) × 0.05`
/// Range: 1.0 (fully transparent) – 1.5 (opaque).
///
/// Profiles without a visibility level use `default_visibility`.
pub fn calculate(params: &AgentParameters, default_visibility: u8) -> f64 {
    let visibility = params.visibility_of_backstage().unwrap_or(default_visibility);
    1.0 + f64::from(PARAM_MAX - i32::from(visibility)) * AMPLIFIER_STEP
}
