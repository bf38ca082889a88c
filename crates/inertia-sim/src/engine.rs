use inertia_core::config::SimulationConfig;
use inertia_core::errors::InertiaResult;
use inertia_core::models::{MonthEntry, Outcome, SimulationResult};
use inertia_core::traits::IDecisionSimulator;
use inertia_core::tracing_setup::events;
use inertia_core::{AgentParameters, RandomSource};

use crate::entry::PendingEntry;
use crate::{action, guards, rng};

/// Simulation engine. Holds only configuration; every run owns its own
/// progress, log, and history.
#[derive(Debug, Clone, Default)]
pub struct SimulationEngine {
    config: SimulationConfig,
}

impl SimulationEngine {
    /// Engine with the reference thresholds: 12 months, success at 8, failure at -5.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom thresholds or locale.
    pub fn with_config(config: SimulationConfig) -> InertiaResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run one simulation, consuming draws from `rng` strictly in order.
    pub fn run<R>(&self, params: &AgentParameters, rng: &mut R) -> SimulationResult
    where
        R: RandomSource + ?Sized,
    {
        let cfg = &self.config;
        events::simulation_started(cfg.max_months);

        let mut progress: i32 = 0;
        let mut outcome = Outcome::InDecision;
        let mut entries: Vec<MonthEntry> = Vec::with_capacity(cfg.max_months as usize);
        let mut month: u32 = 0;

        while outcome == Outcome::InDecision && month < cfg.max_months {
            month += 1;

            if let Some(guard) = guards::first_firing(params, rng) {
                let event = guard.event();
                progress += event.progress_delta();
                // Guard months skip the terminal check.
                let entry = PendingEntry::new(month, event).finalize(false, progress);
                entries.push(record(entry));
                continue;
            }

            let action = action::run(params, rng);
            let pending = PendingEntry::new(month, action.event);
            progress += action.progress_delta();
            entries.push(record(pending.finalize(action.post_action_doubt, progress)));

            outcome = self.evaluate_terminal(progress);
        }

        if month >= cfg.max_months && outcome == Outcome::InDecision {
            outcome = Outcome::IndefinitePostponement;
        }

        let result = SimulationResult {
            steps: entries.iter().map(|e| e.render(cfg.locale)).collect(),
            progress_history: entries.iter().map(|e| e.progress).collect(),
            entries,
            outcome,
        };
        events::simulation_completed(
            result.outcome,
            result.months_elapsed(),
            result.final_progress(),
        );
        result
    }

    /// Run one simulation from a seed.
    pub fn run_seeded(&self, params: &AgentParameters, seed: u64) -> SimulationResult {
        self.run(params, &mut rng::seeded(seed))
    }

    fn evaluate_terminal(&self, progress: i32) -> Outcome {
        if progress >= self.config.success_threshold {
            Outcome::Success
        } else if progress <= self.config.failure_threshold {
            Outcome::Failure
        } else {
            Outcome::InDecision
        }
    }
}

fn record(entry: MonthEntry) -> MonthEntry {
    events::month_processed(
        entry.month,
        entry.event,
        entry.post_action_doubt,
        entry.progress,
    );
    entry
}

impl IDecisionSimulator for SimulationEngine {
    fn simulate(&self, params: &AgentParameters, rng: &mut dyn RandomSource) -> SimulationResult {
        self.run(params, rng)
    }
}

/// Run one simulation with the reference configuration.
pub fn simulate<R>(params: &AgentParameters, rng: &mut R) -> SimulationResult
where
    R: RandomSource + ?Sized,
{
    SimulationEngine::new().run(params, rng)
}

/// Run one simulation with the reference configuration from a seed.
pub fn simulate_seeded(params: &AgentParameters, seed: u64) -> SimulationResult {
    SimulationEngine::new().run_seeded(params, seed)
}
