//! Checkpoint - Save/Load Clock State
//!
//! Serializes the four queues for reporting, and round-trips a full engine
//! (queues plus elapsed minutes) for pause/resume.
//!
//! # Snapshot format
//!
//! The snapshot is a compact JSON object whose keys appear in the fixed order
//! `Min`, `FiveMin`, `Hour`, `Main`:
//!
//! ```text
//! {"Min":[],"FiveMin":[22,13,25,3,7],"Hour":[6,12,17,4,15],"Main":[11,5,...]}
//! ```
//!
//! Existing consumers compare this string literally, so field order and key
//! names are part of the contract.
//!
//! # Critical Invariants
//!
//! - **Ball Conservation**: restored state holds exactly `1..=N`
//! - **Track Capacity**: no track above its fixed capacity
//! - **Fingerprint Matching**: a checkpoint only loads if its hash matches

use crate::core::time::ClockTime;
use crate::models::state::ClockState;
use crate::models::track::{BallId, Track, TrackError, TrackKind};
use crate::orchestrator::engine::{validate_ball_count, BallClock, ClockError};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::VecDeque;
use std::fmt;
use thiserror::Error;

/// Errors that can occur while saving or restoring clock state
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("State validation error: {0}")]
    StateValidation(String),

    #[error("Ball count mismatch: expected {expected}, snapshot holds {actual}")]
    BallCountMismatch { expected: usize, actual: usize },

    #[error("Fingerprint mismatch: expected {expected}, computed {actual}")]
    FingerprintMismatch { expected: String, actual: String },

    #[error(transparent)]
    Clock(#[from] ClockError),

    #[error(transparent)]
    Track(#[from] TrackError),
}

// ============================================================================
// Snapshot Structures
// ============================================================================

/// Point-in-time copy of the four queues
///
/// Field declaration order fixes the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    /// Minute track, oldest ball first
    #[serde(rename = "Min")]
    pub minute: Vec<BallId>,

    /// FiveMinute track, oldest ball first
    #[serde(rename = "FiveMin")]
    pub five_minute: Vec<BallId>,

    /// Hour track, oldest ball first
    #[serde(rename = "Hour")]
    pub hour: Vec<BallId>,

    /// Main reservoir, front of queue first
    #[serde(rename = "Main")]
    pub main: Vec<BallId>,
}

impl From<&ClockState> for ClockSnapshot {
    fn from(state: &ClockState) -> Self {
        ClockSnapshot {
            minute: state.minute().balls().to_vec(),
            five_minute: state.five_minute().balls().to_vec(),
            hour: state.hour().balls().to_vec(),
            main: state.main().iter().copied().collect(),
        }
    }
}

impl ClockSnapshot {
    /// Compact JSON rendering in `Min, FiveMin, Hour, Main` order
    ///
    /// # Example
    ///
    /// ```rust
    /// use ball_clock_core::ClockSnapshot;
    ///
    /// let snapshot = ClockSnapshot {
    ///     minute: vec![],
    ///     five_minute: vec![2],
    ///     hour: vec![],
    ///     main: vec![1, 3],
    /// };
    /// assert_eq!(
    ///     snapshot.to_json().unwrap(),
    ///     r#"{"Min":[],"FiveMin":[2],"Hour":[],"Main":[1,3]}"#
    /// );
    /// ```
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a snapshot previously produced by [`to_json`](Self::to_json)
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Total balls across all four queues
    pub fn ball_count(&self) -> usize {
        self.minute.len() + self.five_minute.len() + self.hour.len() + self.main.len()
    }

    /// SHA-256 of the compact JSON rendering, hex encoded
    ///
    /// Two runs that reach the same configuration produce the same
    /// fingerprint, which makes determinism checks a string comparison.
    pub fn fingerprint(&self) -> Result<String, CheckpointError> {
        let json = self.to_json()?;

        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        let result = hasher.finalize();

        Ok(format!("{:x}", result))
    }
}

impl fmt::Display for ClockSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Complete engine state: queues plus elapsed time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockCheckpoint {
    /// Minutes elapsed when the checkpoint was taken
    pub minutes_elapsed: u64,

    /// Ball count of the clock
    pub ball_count: usize,

    /// The four queues
    pub state: ClockSnapshot,

    /// SHA-256 of `state` (for validation)
    pub fingerprint: String,
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Validate snapshot integrity
///
/// Checks critical invariants:
/// - Ball count matches the expected clock size
/// - Track capacities
/// - Ball conservation (every ball `1..=N` exactly once)
pub fn validate_snapshot(
    snapshot: &ClockSnapshot,
    expected_ball_count: usize,
) -> Result<(), CheckpointError> {
    // 1. Size
    let actual = snapshot.ball_count();
    if actual != expected_ball_count {
        return Err(CheckpointError::BallCountMismatch {
            expected: expected_ball_count,
            actual,
        });
    }

    // 2. Track capacities
    for (kind, balls) in [
        (TrackKind::Minute, &snapshot.minute),
        (TrackKind::FiveMinute, &snapshot.five_minute),
        (TrackKind::Hour, &snapshot.hour),
    ] {
        if balls.len() > kind.capacity() {
            return Err(CheckpointError::StateValidation(format!(
                "{} track holds {} balls, capacity is {}",
                kind,
                balls.len(),
                kind.capacity()
            )));
        }
    }

    // 3. Conservation: each ball 1..=N seen exactly once
    let mut seen = vec![false; expected_ball_count];
    let all_balls = snapshot
        .minute
        .iter()
        .chain(&snapshot.five_minute)
        .chain(&snapshot.hour)
        .chain(&snapshot.main);
    for &ball in all_balls {
        let index = usize::from(ball);
        if index == 0 || index > expected_ball_count {
            return Err(CheckpointError::StateValidation(format!(
                "Ball {} outside range 1..={}",
                ball, expected_ball_count
            )));
        }
        if seen[index - 1] {
            return Err(CheckpointError::StateValidation(format!(
                "Duplicate ball {}",
                ball
            )));
        }
        seen[index - 1] = true;
    }

    Ok(())
}

// ============================================================================
// Save / Restore
// ============================================================================

impl BallClock {
    /// Rebuild an engine from a snapshot taken `minutes_elapsed` minutes in
    ///
    /// # Errors
    ///
    /// Fails if the snapshot's ball count is outside 27..=127, or if it breaks
    /// conservation or capacity.
    pub fn from_snapshot(
        snapshot: &ClockSnapshot,
        minutes_elapsed: u64,
    ) -> Result<Self, CheckpointError> {
        let ball_count = snapshot.ball_count();
        let ball_count_i64 = i64::try_from(ball_count).unwrap_or(i64::MAX);
        validate_ball_count(ball_count_i64)?;
        validate_snapshot(snapshot, ball_count)?;

        let state = ClockState::from_parts(
            snapshot.main.iter().copied().collect::<VecDeque<_>>(),
            Track::from_balls(TrackKind::Minute, snapshot.minute.clone())?,
            Track::from_balls(TrackKind::FiveMinute, snapshot.five_minute.clone())?,
            Track::from_balls(TrackKind::Hour, snapshot.hour.clone())?,
        );

        Ok(BallClock::from_parts(state, ClockTime::at_minute(minutes_elapsed)))
    }

    /// Capture the engine for later resumption
    pub fn save_checkpoint(&self) -> Result<ClockCheckpoint, CheckpointError> {
        let state = self.snapshot();
        let fingerprint = state.fingerprint()?;
        Ok(ClockCheckpoint {
            minutes_elapsed: self.minutes_elapsed(),
            ball_count: self.ball_count(),
            state,
            fingerprint,
        })
    }

    /// Restore an engine saved with [`save_checkpoint`](Self::save_checkpoint)
    pub fn load_checkpoint(checkpoint: &ClockCheckpoint) -> Result<Self, CheckpointError> {
        let actual = checkpoint.state.fingerprint()?;
        if actual != checkpoint.fingerprint {
            return Err(CheckpointError::FingerprintMismatch {
                expected: checkpoint.fingerprint.clone(),
                actual,
            });
        }

        if checkpoint.state.ball_count() != checkpoint.ball_count {
            return Err(CheckpointError::BallCountMismatch {
                expected: checkpoint.ball_count,
                actual: checkpoint.state.ball_count(),
            });
        }

        Self::from_snapshot(&checkpoint.state, checkpoint.minutes_elapsed)
    }
}
