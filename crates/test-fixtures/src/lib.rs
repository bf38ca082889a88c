//! Test helpers shared across the workspace: a scripted random source,
//! profile builders, and golden JSON fixtures.

use std::collections::VecDeque;
use std::path::PathBuf;

use inertia_core::params::AgentParametersBuilder;
use inertia_core::{AgentParameters, RandomSource};
use serde::de::DeserializeOwned;

/// A draw that fires any guard whose probability is above zero.
pub const FIRE: f64 = 0.0;

/// A draw that misses every guard with probability below one.
pub const MISS: f64 = 0.999_999;

/// Replays a fixed sequence of draws and counts how many were consumed.
///
/// # Panics
/// Panics when asked for more draws than were scripted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    draws: VecDeque<f64>,
    consumed: usize,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Number of draws handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Number of scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let consumed = self.consumed;
        let draw = self
            .draws
            .pop_front()
            .unwrap_or_else(|| panic!("ScriptedSource exhausted after {consumed} draws"));
        self.consumed += 1;
        draw
    }
}

/// Build a profile starting from every bias at zero.
///
/// # Panics
/// Panics if the customised profile is invalid.
pub fn profile(
    customise: impl FnOnce(AgentParametersBuilder) -> AgentParametersBuilder,
) -> AgentParameters {
    let zero = AgentParameters::builder()
        .procrastination(0)
        .pessimism(0)
        .loss_aversion(0)
        .scarcity(0)
        .avoidance(0)
        .pressure(0)
        .invisibilisation(0);
    customise(zero)
        .build()
        .unwrap_or_else(|e| panic!("invalid test profile: {e}"))
}

/// Root directory of the fixture data shipped with this crate.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let shown = path.display();
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {shown}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {shown}: {e}"))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}
