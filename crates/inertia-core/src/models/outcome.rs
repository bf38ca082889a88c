use std::fmt;

use serde::{Deserialize, Serialize};

use super::narrative::{self, NarrativeLocale};

/// Terminal state of a simulation run.
///
/// A run starts `InDecision` and moves to exactly one of the other three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    #[default]
    InDecision,
    Success,
    Failure,
    IndefinitePostponement,
}

impl Outcome {
    pub const TERMINAL: [Outcome; 3] = [Self::Success, Self::Failure, Self::IndefinitePostponement];

    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InDecision)
    }

    pub fn label(self, locale: NarrativeLocale) -> &'static str {
        narrative::outcome_label(locale, self)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(NarrativeLocale::En))
    }
}
