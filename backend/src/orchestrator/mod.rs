//! Orchestrator - the ball clock engine
//!
//! Implements the one-minute transition and state checkpoints.
//!
//! See `engine.rs` for the tick implementation.

pub mod checkpoint;
pub mod engine;

#[cfg(test)]
mod tests;

// Re-export main types for convenience
pub use engine::{validate_ball_count, BallClock, ClockError, Landing, TickResult};

// Re-export checkpoint types
pub use checkpoint::{validate_snapshot, CheckpointError, ClockCheckpoint, ClockSnapshot};
