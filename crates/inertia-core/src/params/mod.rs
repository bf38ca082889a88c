//! Bias parameter sets consumed by the simulation and scoring engines.
//!
//! Both scales validate at construction and are immutable afterwards.

pub mod agent;
pub mod continuous;

pub use agent::{AgentParameters, AgentParametersBuilder};
pub use continuous::{ContinuousParameters, ContinuousParametersBuilder};
