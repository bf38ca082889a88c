use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use inertia_core::errors::InertiaError;

/// The two scoring strategies, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringVariant {
    /// Integer scale with visibility amplifier.
    Scaled,
    /// Continuous scale, 0.4/0.3/0.3 weighted average.
    WeightedAverage,
}

impl ScoringVariant {
    pub const ALL: [ScoringVariant; 2] = [Self::Scaled, Self::WeightedAverage];

    pub fn name(self) -> &'static str {
        match self {
            Self::Scaled => "scaled",
            Self::WeightedAverage => "weighted_average",
        }
    }
}

impl fmt::Display for ScoringVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScoringVariant {
    type Err = InertiaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| InertiaError::UnknownVariant {
                name: s.to_string(),
            })
    }
}
