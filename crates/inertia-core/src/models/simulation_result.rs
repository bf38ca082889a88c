use serde::{Deserialize, Serialize};

use super::month::MonthEntry;
use super::narrative::NarrativeLocale;
use super::outcome::Outcome;
use crate::errors::InertiaResult;

/// Everything one simulation run produces.
///
/// `entries`, `steps` and `progress_history` always have the same length,
/// one element per elapsed month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub entries: Vec<MonthEntry>,
    /// Rendered narrative, one line per entry.
    pub steps: Vec<String>,
    pub outcome: Outcome,
    pub progress_history: Vec<i32>,
}

impl SimulationResult {
    pub fn months_elapsed(&self) -> usize {
        self.entries.len()
    }

    /// Progress after the last elapsed month (0 if no month ran).
    pub fn final_progress(&self) -> i32 {
        self.progress_history.last().copied().unwrap_or(0)
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Re-render the narrative in another locale.
    pub fn render(&self, locale: NarrativeLocale) -> Vec<String> {
        self.entries.iter().map(|e| e.render(locale)).collect()
    }

    pub fn to_json(&self) -> InertiaResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
