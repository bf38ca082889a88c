//! The action phase, reached by months that pass every guard.

use inertia_core::models::MonthEvent;
use inertia_core::{AgentParameters, RandomSource};

/// What the action phase produced: the attempted action and whether loss
/// aversion cast doubt on it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionOutcome {
    pub event: MonthEvent,
    pub post_action_doubt: bool,
}

impl ActionOutcome {
    /// Net change to decision progress, doubt included.
    pub fn progress_delta(&self) -> i32 {
        self.event.progress_delta() - i32::from(self.post_action_doubt)
    }
}

/// Draw the pressure check, then the loss-aversion check. Always two draws.
pub fn run<R>(params: &AgentParameters, rng: &mut R) -> ActionOutcome
where
    R: RandomSource + ?Sized,
{
    let event = if rng.next_unit() < f64::from(params.pressure()) / 10.0 {
        MonthEvent::ExternalPressure
    } else {
        MonthEvent::Reflection
    };
    let post_action_doubt = rng.next_unit() < f64::from(params.loss_aversion()) / 15.0;

    ActionOutcome {
        event,
        post_action_doubt,
    }
}
