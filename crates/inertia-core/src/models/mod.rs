pub mod month;
pub mod narrative;
pub mod outcome;
pub mod score;
pub mod simulation_result;

pub use month::{MonthEntry, MonthEvent};
pub use narrative::NarrativeLocale;
pub use outcome::Outcome;
pub use score::{InertiaScore, ScoreBreakdown, WeightedScore};
pub use simulation_result::SimulationResult;
