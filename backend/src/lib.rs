//! Ball Clock Core - Rust Engine
//!
//! Deterministic simulator for the ball clock puzzle: numbered balls move
//! from a Main reservoir through Minute, FiveMinute and Hour tracks, one ball
//! per simulated minute.
//!
//! # Architecture
//!
//! - **core**: Minute counting and hour/day boundaries
//! - **models**: Tracks and the four-queue clock state
//! - **orchestrator**: The tick engine and state checkpoints
//! - **simulation**: Run configuration, completion predicates, run loop
//! - **analysis**: Cycle length from the half-day permutation
//!
//! # Critical Invariants
//!
//! 1. The balls across all four queues are always exactly `1..=N`
//! 2. Minute holds at most 4 balls, FiveMinute and Hour at most 11
//! 3. The engine is deterministic: same ball count, same history

// Module declarations
pub mod analysis;
pub mod core;
pub mod models;
pub mod orchestrator;
pub mod simulation;

// Re-exports for convenience
pub use crate::core::time::ClockTime;
pub use models::{
    state::{ClockState, MAX_BALLS, MIN_BALLS},
    track::{BallId, Track, TrackError, TrackKind},
};
pub use orchestrator::{
    BallClock, CheckpointError, ClockCheckpoint, ClockError, ClockSnapshot, Landing, TickResult,
};
pub use simulation::{
    run_simulation, SimulationConfig, SimulationError, SimulationMode, SimulationReport,
};
