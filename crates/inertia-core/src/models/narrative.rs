//! Narrative text tables for the monthly log and outcome labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::month::MonthEvent;
use super::outcome::Outcome;
use crate::errors::InertiaError;

/// Language of the rendered narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrativeLocale {
    #[default]
    En,
    Fr,
}

impl NarrativeLocale {
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }
}

impl fmt::Display for NarrativeLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for NarrativeLocale {
    type Err = InertiaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            _ => Err(InertiaError::UnknownLocale {
                name: s.to_string(),
            }),
        }
    }
}

pub fn month_prefix(locale: NarrativeLocale, month: u32) -> String {
    match locale {
        NarrativeLocale::En => format!("Month {month}: "),
        NarrativeLocale::Fr => format!("Mois {month} : "),
    }
}

pub fn event_text(locale: NarrativeLocale, event: MonthEvent) -> &'static str {
    match locale {
        NarrativeLocale::En => match event {
            MonthEvent::NegativeVision => "negative-vision inertia",
            MonthEvent::Deferred => "decision deferred",
            MonthEvent::OptionsNarrowed => "options narrowed → status quo",
            MonthEvent::InvisibleAction => "invisible action → sense of futility",
            MonthEvent::SelfErasure => "self-erasure → silent renunciation",
            MonthEvent::ExternalPressure => "external pressure → attempted action",
            MonthEvent::Reflection => "reflection / micro-action",
        },
        NarrativeLocale::Fr => match event {
            MonthEvent::NegativeVision => "vision négative → inertie",
            MonthEvent::Deferred => "report de la décision",
            MonthEvent::OptionsNarrowed => "réduction des options → statu quo",
            MonthEvent::InvisibleAction => "action invisible → sentiment d’inutilité",
            MonthEvent::SelfErasure => "auto-effacement → renoncement silencieux",
            MonthEvent::ExternalPressure => "pression extérieure → tentative d’action",
            MonthEvent::Reflection => "réflexion / micro-action",
        },
    }
}

/// Appended after the month's line, period included.
pub fn doubt_suffix(locale: NarrativeLocale) -> &'static str {
    match locale {
        NarrativeLocale::En => " → post-action doubt.",
        NarrativeLocale::Fr => " → doute post-action.",
    }
}

pub fn outcome_label(locale: NarrativeLocale, outcome: Outcome) -> &'static str {
    match locale {
        NarrativeLocale::En => match outcome {
            Outcome::InDecision => "in decision",
            Outcome::Success => "success",
            Outcome::Failure => "failure",
            Outcome::IndefinitePostponement => "indefinite postponement",
        },
        NarrativeLocale::Fr => match outcome {
            Outcome::InDecision => "indécision",
            Outcome::Success => "succès",
            Outcome::Failure => "échec",
            Outcome::IndefinitePostponement => "report indéfini",
        },
    }
}
