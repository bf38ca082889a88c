//! The per-month guard chain.

use inertia_core::models::MonthEvent;
use inertia_core::{AgentParameters, RandomSource};

/// Invisibilisation must exceed this level before self-erasure is checked.
pub const SELF_ERASURE_GATE: u8 = 8;

/// Fixed firing probability of the self-erasure guard once it is reachable.
pub const SELF_ERASURE_PROBABILITY: f64 = 0.5;

/// A probabilistic check that ends the month early when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guard {
    Pessimism,
    Procrastination,
    Scarcity,
    InvisibleAction,
    SelfErasure,
}

/// Evaluation order. Observable through the narrative, so never reorder.
pub const GUARD_CHAIN: [Guard; 5] = [
    Guard::Pessimism,
    Guard::Procrastination,
    Guard::Scarcity,
    Guard::InvisibleAction,
    Guard::SelfErasure,
];

impl Guard {
    /// Firing probability for this profile, or `None` when the guard is
    /// skipped outright (no draw is consumed).
    pub fn probability(self, params: &AgentParameters) -> Option<f64> {
        match self {
            Self::Pessimism => Some(f64::from(params.pessimism()) / 15.0),
            Self::Procrastination => Some(f64::from(params.procrastination()) / 12.0),
            Self::Scarcity => Some(f64::from(params.scarcity()) / 12.0),
            Self::InvisibleAction => Some(f64::from(params.invisibilisation()) / 15.0),
            Self::SelfErasure => {
                (params.invisibilisation() > SELF_ERASURE_GATE).then_some(SELF_ERASURE_PROBABILITY)
            }
        }
    }

    /// The narrative event logged when this guard fires.
    pub fn event(self) -> MonthEvent {
        match self {
            Self::Pessimism => MonthEvent::NegativeVision,
            Self::Procrastination => MonthEvent::Deferred,
            Self::Scarcity => MonthEvent::OptionsNarrowed,
            Self::InvisibleAction => MonthEvent::InvisibleAction,
            Self::SelfErasure => MonthEvent::SelfErasure,
        }
    }
}

/// Walk the chain in order and return the first guard that fires.
///
/// Each reached guard consumes exactly one draw; the walk stops at the first hit.
pub fn first_firing<R>(params: &AgentParameters, rng: &mut R) -> Option<Guard>
where
    R: RandomSource + ?Sized,
{
    GUARD_CHAIN
        .into_iter()
        .find(|guard| match guard.probability(params) {
            Some(p) => rng.next_unit() < p,
            None => false,
        })
}
