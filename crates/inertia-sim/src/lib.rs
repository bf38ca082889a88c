//! # inertia-sim
//!
//! Stochastic month-by-month decision simulation.
//! Each month walks a fixed chain of bias guards; the first that fires ends
//! the month. Months that pass every guard reach the action phase, where
//! external pressure and loss aversion move decision progress. A run ends on
//! the first action month that crosses a progress threshold, or after the
//! month cap.

pub mod action;
pub mod batch;
pub mod engine;
mod entry;
pub mod guards;
pub mod rng;

pub use batch::{BatchRunner, BatchSummary};
pub use engine::{simulate, simulate_seeded, SimulationEngine};
pub use guards::Guard;
