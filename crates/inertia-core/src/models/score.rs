use serde::{Deserialize, Serialize};

/// Integer-scale inertia score with its sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub cognitive: f64,
    pub circumstantial: f64,
    pub structural: f64,
    pub raw_total: f64,
    /// `raw_total * visibility_amplifier`.
    pub corrected_total: f64,
    /// In [1.0, 1.5]; grows as backstage visibility drops.
    pub visibility_amplifier: f64,
}

/// Continuous-scale weighted-average score. `inertia_score` is in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedScore {
    pub psychic: f64,
    pub material: f64,
    pub structural: f64,
    pub inertia_score: f64,
}

/// Result of scoring with a variant chosen by name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum InertiaScore {
    Scaled(ScoreBreakdown),
    WeightedAverage(WeightedScore),
}

impl InertiaScore {
    /// Headline number of whichever variant produced this score.
    pub fn total(&self) -> f64 {
        match self {
            Self::Scaled(b) => b.corrected_total,
            Self::WeightedAverage(w) => w.inertia_score,
        }
    }
}
