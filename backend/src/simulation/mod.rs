//! Simulation driver
//!
//! Configuration, completion predicates and the run loop that turn the
//! engine into the two reporting modes.

pub mod completion;
pub mod config;
pub mod runner;

use crate::analysis::AnalysisError;
use crate::orchestrator::checkpoint::CheckpointError;
use crate::orchestrator::engine::ClockError;
use thiserror::Error;

pub use config::{CycleStrategy, SimulationConfig, SimulationMode};
pub use runner::{run, run_for, run_simulation, run_until_cycle, SimulationOutcome, SimulationReport};

/// Errors that end a run before it produces a report
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Error - invalid timeLimit specified for simulation")]
    InvalidTimeLimit { time_limit: i64 },

    #[error(transparent)]
    Clock(#[from] ClockError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
}
