use serde::{Deserialize, Serialize};

use super::narrative::{self, NarrativeLocale};

/// What happened to the agent in one simulated month.
///
/// The first five variants are guard outcomes that end the month early.
/// `ExternalPressure` and `Reflection` are the two branches of the action phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthEvent {
    NegativeVision,
    Deferred,
    OptionsNarrowed,
    InvisibleAction,
    SelfErasure,
    ExternalPressure,
    Reflection,
}

impl MonthEvent {
    pub const ALL: [MonthEvent; 7] = [
        Self::NegativeVision,
        Self::Deferred,
        Self::OptionsNarrowed,
        Self::InvisibleAction,
        Self::SelfErasure,
        Self::ExternalPressure,
        Self::Reflection,
    ];

    /// Change applied to decision progress by the event itself,
    /// before any post-action doubt.
    pub fn progress_delta(self) -> i32 {
        match self {
            Self::InvisibleAction => -1,
            Self::ExternalPressure => 3,
            Self::Reflection => 1,
            Self::NegativeVision | Self::Deferred | Self::OptionsNarrowed | Self::SelfErasure => 0,
        }
    }

    /// True for events produced by the action phase.
    pub fn is_action(self) -> bool {
        matches!(self, Self::ExternalPressure | Self::Reflection)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::NegativeVision => "negative_vision",
            Self::Deferred => "deferred",
            Self::OptionsNarrowed => "options_narrowed",
            Self::InvisibleAction => "invisible_action",
            Self::SelfErasure => "self_erasure",
            Self::ExternalPressure => "external_pressure",
            Self::Reflection => "reflection",
        }
    }
}

/// One finalized month of a simulation run. Never mutated after the engine
/// pushes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthEntry {
    /// 1-based month index.
    pub month: u32,
    pub event: MonthEvent,
    /// Loss aversion undid one point after the action. Only ever set on action events.
    pub post_action_doubt: bool,
    /// Running decision progress after this month.
    pub progress: i32,
}

impl MonthEntry {
    /// Render the narrative line for this month.
    pub fn render(&self, locale: NarrativeLocale) -> String {
        let mut line = format!(
            "{}{}.",
            narrative::month_prefix(locale, self.month),
            narrative::event_text(locale, self.event)
        );
        if self.post_action_doubt {
            line.push_str(narrative::doubt_suffix(locale));
        }
        line
    }
}
