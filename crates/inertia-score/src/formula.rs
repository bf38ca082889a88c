use inertia_core::models::ScoreBreakdown;
use inertia_core::AgentParameters;

use crate::factors;

/// Integer-scale composite score.
///
/// ```text
/// rawTotal       = cognitive + circumstantial + structural
/// correctedTotal = rawTotal × visibilityAmplifier
/// ```
///
/// No clamping: every valid profile yields a finite, non-negative breakdown.
pub fn compute_breakdown(params: &AgentParameters, default_visibility: u8) -> ScoreBreakdown {
    let cognitive = factors::cognitive::calculate(params);
    let circumstantial = factors::circumstantial::calculate(params);
    let structural = factors::structural::calculate(params);
    let visibility_amplifier = factors::visibility::calculate(params, default_visibility);

    let raw_total = cognitive + circumstantial + structural;

    ScoreBreakdown {
        cognitive,
        circumstantial,
        structural,
        raw_total,
        corrected_total: raw_total * visibility_amplifier,
        visibility_amplifier,
    }
}
