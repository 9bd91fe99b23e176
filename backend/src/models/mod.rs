//! Domain models for the ball clock

pub mod state;
pub mod track;

// Re-exports
pub use state::{ClockState, MAX_BALLS, MIN_BALLS};
pub use track::{BallId, Track, TrackError, TrackKind};
