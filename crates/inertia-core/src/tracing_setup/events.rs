//! Structured log events for simulation and scoring.
//!
//! Each function emits a `tracing` event with structured fields.

use crate::models::{MonthEvent, Outcome};

/// Log the start of a simulation run.
pub fn simulation_started(max_months: u32) {
    tracing::debug!(
        event = "simulation_started",
        max_months = max_months,
        "simulation started"
    );
}

/// Log one processed month.
pub fn month_processed(
    month: u32,
    month_event: MonthEvent,
    post_action_doubt: bool,
    progress: i32,
) {
    tracing::trace!(
        event = "month_processed",
        month = month,
        month_event = month_event.name(),
        post_action_doubt = post_action_doubt,
        progress = progress,
        "month processed"
    );
}

/// Log the end of a simulation run.
pub fn simulation_completed(outcome: Outcome, months: usize, final_progress: i32) {
    tracing::debug!(
        event = "simulation_completed",
        outcome = %outcome,
        months = months,
        final_progress = final_progress,
        "simulation completed"
    );
}

/// Log a computed inertia score.
pub fn score_computed(variant: &str, total: f64) {
    tracing::debug!(
        event = "score_computed",
        variant = %variant,
        total = total,
        "inertia score computed"
    );
}

/// Log a completed batch of runs.
pub fn batch_completed(runs: usize, successes: usize, failures: usize, postponements: usize) {
    tracing::info!(
        event = "batch_completed",
        runs = runs,
        successes = successes,
        failures = failures,
        postponements = postponements,
        "simulation batch completed"
    );
}
