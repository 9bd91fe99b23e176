//! Ball Clock Engine
//!
//! Owns the clock state and implements the one-minute transition.
//!
//! # Architecture
//!
//! Each tick moves a single ball:
//!
//! ```text
//! For each tick t:
//! 1. Take the front ball of Main
//! 2. Offer it to Minute; if Minute has room, it stays there
//! 3. Otherwise Minute releases (newest first) onto Main and the ball
//!    moves on to FiveMinute, then Hour, by the same rule
//! 4. If Hour also overflows, the ball returns to the back of Main
//! 5. Advance time by one minute
//! ```
//!
//! # Example
//!
//! ```rust
//! use ball_clock_core::BallClock;
//!
//! let mut clock = BallClock::new(30).unwrap();
//!
//! for _ in 0..325 {
//!     clock.tick().unwrap();
//! }
//!
//! let snapshot = clock.snapshot();
//! assert!(snapshot.minute.is_empty());
//! assert_eq!(snapshot.five_minute.len(), 5);
//! assert_eq!(snapshot.hour.len(), 5);
//! ```

use crate::core::time::ClockTime;
use crate::models::state::{ClockState, MAX_BALLS, MIN_BALLS};
use crate::models::track::{BallId, TrackError, TrackKind};
use crate::orchestrator::checkpoint::ClockSnapshot;
use crate::simulation::completion;
use thiserror::Error;
use tracing::{debug, error};

// ============================================================================
// Errors
// ============================================================================

/// Errors raised by the engine
#[derive(Debug, Error, PartialEq)]
pub enum ClockError {
    /// Ball count outside the puzzle's accepted range
    #[error("Error - invalid ballCount specified for simulation")]
    InvalidBallCount { ball_count: i64 },

    /// Main was empty when a tick needed a ball; conservation is broken
    #[error("Internal consistency error: Main reservoir empty at minute {minute}")]
    EmptyMain { minute: u64 },

    #[error("Track error: {0}")]
    Track(#[from] TrackError),
}

// ============================================================================
// Tick Result
// ============================================================================

/// Where the moving ball came to rest at the end of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// Appended to one of the tracks
    Track(TrackKind),

    /// Hour overflowed and the ball went back to Main
    Main,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Minutes elapsed after this tick
    pub minute: u64,

    /// Ball taken from the front of Main
    pub ball: BallId,

    /// Where that ball ended up
    pub landing: Landing,

    /// Number of tracks released this tick, always a prefix of
    /// Minute, FiveMinute, Hour
    pub tracks_released: usize,
}

impl TickResult {
    /// Tracks that emptied onto Main this tick, in release order
    pub fn released(&self) -> &'static [TrackKind] {
        let order: &'static [TrackKind; 3] = &TrackKind::ALL;
        &order[..self.tracks_released]
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Deterministic ball clock simulator
///
/// The engine has a single owner for its whole life. Stopping between any
/// two calls to [`tick`](Self::tick) leaves the state consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BallClock {
    /// Main reservoir and the three tracks
    state: ClockState,

    /// Minutes elapsed since initialization (or since the restored checkpoint)
    time: ClockTime,
}

impl BallClock {
    /// Create a clock holding balls `1..=ball_count` in Main
    ///
    /// # Errors
    ///
    /// `ClockError::InvalidBallCount` unless `27 <= ball_count <= 127`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ball_clock_core::{BallClock, ClockError};
    ///
    /// assert!(BallClock::new(27).is_ok());
    /// assert_eq!(
    ///     BallClock::new(26).unwrap_err(),
    ///     ClockError::InvalidBallCount { ball_count: 26 }
    /// );
    /// ```
    pub fn new(ball_count: i64) -> Result<Self, ClockError> {
        let ball_count = validate_ball_count(ball_count)?;
        Ok(Self {
            state: ClockState::new(ball_count),
            time: ClockTime::new(),
        })
    }

    /// Assemble an engine from validated parts (checkpoint restore)
    pub(crate) fn from_parts(state: ClockState, time: ClockTime) -> Self {
        Self { state, time }
    }

    /// Advance the clock by one minute
    ///
    /// # Errors
    ///
    /// `ClockError::EmptyMain` if Main has no ball to release. This cannot
    /// happen while the conservation invariant holds, so callers treat it as
    /// fatal.
    pub fn tick(&mut self) -> Result<TickResult, ClockError> {
        let minute = self.time.minutes_elapsed();
        let (main, tracks) = self.state.queues_mut();

        let ball = main.pop_front().ok_or_else(|| {
            error!(minute, "Main reservoir empty, ball conservation violated");
            ClockError::EmptyMain { minute }
        })?;

        let mut tracks_released = 0;
        let mut landing = Landing::Main;
        for track in tracks {
            if !track.is_full() {
                track.push(ball)?;
                landing = Landing::Track(track.kind());
                break;
            }
            track.release_into(main);
            tracks_released += 1;
        }

        if landing == Landing::Main {
            main.push_back(ball);
            debug!(minute = minute + 1, ball, "Hour track released, all balls back in Main");
        }

        self.time.advance_minute();

        Ok(TickResult {
            minute: self.time.minutes_elapsed(),
            ball,
            landing,
            tracks_released,
        })
    }

    /// True when Main is back in ascending order and every track is empty
    ///
    /// Only meaningful on a 60-minute boundary; the engine does not check
    /// when it is called.
    pub fn is_initial_order(&self) -> bool {
        completion::is_initial_order(&self.state)
    }

    /// Read-only copy of all four queues
    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot::from(&self.state)
    }

    pub fn state(&self) -> &ClockState {
        &self.state
    }

    pub fn time(&self) -> ClockTime {
        self.time
    }

    pub fn minutes_elapsed(&self) -> u64 {
        self.time.minutes_elapsed()
    }

    pub fn ball_count(&self) -> usize {
        self.state.ball_count()
    }
}

/// Check `27 <= ball_count <= 127` and narrow to a ball id
pub fn validate_ball_count(ball_count: i64) -> Result<BallId, ClockError> {
    if !(MIN_BALLS..=MAX_BALLS).contains(&ball_count) {
        return Err(ClockError::InvalidBallCount { ball_count });
    }
    BallId::try_from(ball_count).map_err(|_| ClockError::InvalidBallCount { ball_count })
}
