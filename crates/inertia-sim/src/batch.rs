//! Repeated seeded runs of one profile, summarised.

use std::collections::BTreeMap;

use serde::Serialize;

use inertia_core::models::{MonthEvent, Outcome, SimulationResult};
use inertia_core::tracing_setup::events;
use inertia_core::AgentParameters;

use crate::engine::SimulationEngine;

/// Aggregate statistics over a batch of runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub runs: usize,
    pub successes: usize,
    pub failures: usize,
    pub postponements: usize,
    /// Months elapsed across all runs.
    pub total_months: usize,
    pub mean_months: f64,
    pub mean_final_progress: f64,
    /// How many months logged each event.
    pub event_counts: BTreeMap<MonthEvent, usize>,
    /// Action months that ended in post-action doubt.
    pub doubt_count: usize,
}

impl BatchSummary {
    pub fn success_rate(&self) -> f64 {
        ratio(self.successes, self.runs)
    }

    pub fn failure_rate(&self) -> f64 {
        ratio(self.failures, self.runs)
    }

    pub fn postponement_rate(&self) -> f64 {
        ratio(self.postponements, self.runs)
    }

    pub fn event_count(&self, event: MonthEvent) -> usize {
        self.event_counts.get(&event).copied().unwrap_or(0)
    }

    /// Share of all elapsed months that logged `event`.
    pub fn event_frequency(&self, event: MonthEvent) -> f64 {
        ratio(self.event_count(event), self.total_months)
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Runs one profile many times with consecutive seeds. Sequential.
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    engine: SimulationEngine,
}

impl BatchRunner {
    pub fn new(engine: SimulationEngine) -> Self {
        Self { engine }
    }

    /// Run `runs` simulations seeded `base_seed`, `base_seed + 1`, ...
    pub fn run(&self, params: &AgentParameters, base_seed: u64, runs: usize) -> BatchSummary {
        self.run_with(params, base_seed, runs, |_| {})
    }

    /// Like [`BatchRunner::run`], handing each result to `inspect` before it is folded in.
    pub fn run_with<F>(
        &self,
        params: &AgentParameters,
        base_seed: u64,
        runs: usize,
        mut inspect: F,
    ) -> BatchSummary
    where
        F: FnMut(&SimulationResult),
    {
        let mut summary = BatchSummary {
            runs,
            ..BatchSummary::default()
        };
        let mut progress_sum: i64 = 0;

        for i in 0..runs {
            let result = self
                .engine
                .run_seeded(params, base_seed.wrapping_add(i as u64));
            inspect(&result);

            match result.outcome {
                Outcome::Success => summary.successes += 1,
                Outcome::Failure => summary.failures += 1,
                Outcome::IndefinitePostponement => summary.postponements += 1,
                Outcome::InDecision => {}
            }
            summary.total_months += result.months_elapsed();
            progress_sum += i64::from(result.final_progress());
            for entry in &result.entries {
                *summary.event_counts.entry(entry.event).or_insert(0) += 1;
                if entry.post_action_doubt {
                    summary.doubt_count += 1;
                }
            }
        }

        if runs > 0 {
            summary.mean_months = summary.total_months as f64 / runs as f64;
            summary.mean_final_progress = progress_sum as f64 / runs as f64;
        }

        events::batch_completed(
            runs,
            summary.successes,
            summary.failures,
            summary.postponements,
        );
        summary
    }
}
