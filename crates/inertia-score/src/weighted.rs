//! Continuous-scale weighted-average variant.

use inertia_core::models::WeightedScore;
use inertia_core::ContinuousParameters;

pub const PSYCHIC_WEIGHT: f64 = 0.4;
pub const MATERIAL_WEIGHT: f64 = 0.3;
pub const STRUCTURAL_WEIGHT: f64 = 0.3;

/// ```text
/// psychic      = (pessimism + procrastination + lossAversion) / 3
/// material     = (scarcity + pressure) / 2
/// structural   = invisibilisation
/// inertiaScore = (psychic × 0.4 + material × 0.3 + structural × 0.3) × 100
/// ```
///
/// Unlike the scaled variant, pressure adds to inertia here.
/// Range: 0 – 100.
pub fn compute(params: &ContinuousParameters) -> WeightedScore {
    let psychic = (params.pessimism() + params.procrastination() + params.loss_aversion()) / 3.0;
    let material = (params.scarcity() + params.pressure()) / 2.0;
    let structural = params.invisibilisation();

    let inertia_score =
        (psychic * PSYCHIC_WEIGHT + material * MATERIAL_WEIGHT + structural * STRUCTURAL_WEIGHT)
            * 100.0;

    WeightedScore {
        psychic,
        material,
        structural,
        inertia_score,
    }
}
