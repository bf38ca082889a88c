pub mod random_source;
pub mod scorer;
pub mod simulator;

pub use random_source::RandomSource;
pub use scorer::IInertiaScorer;
pub use simulator::IDecisionSimulator;
