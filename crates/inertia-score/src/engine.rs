use inertia_core::config::ScoringConfig;
use inertia_core::errors::InertiaResult;
use inertia_core::models::{InertiaScore, ScoreBreakdown, WeightedScore};
use inertia_core::traits::IInertiaScorer;
use inertia_core::tracing_setup::events;
use inertia_core::{AgentParameters, ContinuousParameters};

use crate::variant::ScoringVariant;
use crate::{formula, weighted};

/// Score engine exposing both scoring variants.
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    config: ScoringConfig,
}

impl ScoreEngine {
    /// Engine assuming backstage visibility 5 when a profile has none.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScoringConfig) -> InertiaResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn default_visibility(&self) -> u8 {
        self.config.default_visibility
    }

    /// Integer-scale breakdown with visibility amplifier.
    pub fn compute_inertia_score(&self, params: &AgentParameters) -> ScoreBreakdown {
        let breakdown = formula::compute_breakdown(params, self.config.default_visibility);
        events::score_computed(ScoringVariant::Scaled.name(), breakdown.corrected_total);
        breakdown
    }

    /// Continuous-scale weighted average.
    pub fn compute_weighted(&self, params: &ContinuousParameters) -> WeightedScore {
        let score = weighted::compute(params);
        events::score_computed(ScoringVariant::WeightedAverage.name(), score.inertia_score);
        score
    }

    /// Score an integer-scale profile with the named variant. The weighted
    /// average sees the profile mapped onto [0, 1].
    pub fn score(&self, variant: ScoringVariant, params: &AgentParameters) -> InertiaScore {
        match variant {
            ScoringVariant::Scaled => InertiaScore::Scaled(self.compute_inertia_score(params)),
            ScoringVariant::WeightedAverage => {
                InertiaScore::WeightedAverage(self.compute_weighted(&params.to_continuous()))
            }
        }
    }

    /// Like [`ScoreEngine::score`], with the variant given by name.
    pub fn score_named(
        &self,
        variant: &str,
        params: &AgentParameters,
    ) -> InertiaResult<InertiaScore> {
        Ok(self.score(variant.parse()?, params))
    }
}

impl IInertiaScorer for ScoreEngine {
    fn compute_inertia_score(&self, params: &AgentParameters) -> ScoreBreakdown {
        ScoreEngine::compute_inertia_score(self, params)
    }
}

/// Integer-scale inertia score with the default configuration.
pub fn compute_inertia_score(params: &AgentParameters) -> ScoreBreakdown {
    ScoreEngine::new().compute_inertia_score(params)
}
