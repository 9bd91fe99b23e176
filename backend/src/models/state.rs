//! Clock State
//!
//! The complete configuration of the ball clock: the Main reservoir plus the
//! Minute, FiveMinute and Hour tracks.
//!
//! # Critical Invariants
//!
//! 1. **Ball Conservation**: the union of all four queues is exactly `{1..N}`
//! 2. **Track Capacity**: Minute <= 4, FiveMinute <= 11, Hour <= 11
//! 3. **Main Ordering**: Main is consumed from the front and refilled at the back

use crate::models::track::{BallId, Track, TrackKind};
use std::collections::VecDeque;

/// Smallest ball count the puzzle accepts
pub const MIN_BALLS: i64 = 27;

/// Largest ball count the puzzle accepts
pub const MAX_BALLS: i64 = 127;

/// Four-queue configuration of the clock
///
/// # Example
///
/// ```rust
/// use ball_clock_core::BallClock;
///
/// let clock = BallClock::new(30).unwrap();
/// let state = clock.state();
/// assert_eq!(state.ball_count(), 30);
/// assert_eq!(state.main().front(), Some(&1));
/// assert!(state.minute().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockState {
    /// Reservoir feeding the Minute track
    main: VecDeque<BallId>,

    minute: Track,
    five_minute: Track,
    hour: Track,

    /// Number of balls in the clock, fixed at construction
    ball_count: usize,
}

impl ClockState {
    /// Create the initial configuration: Main = `1..=ball_count`, tracks empty
    ///
    /// No bounds check; public construction goes through
    /// [`BallClock::new`](crate::BallClock::new).
    pub(crate) fn new(ball_count: BallId) -> Self {
        Self {
            main: (1..=ball_count).collect(),
            minute: Track::new(TrackKind::Minute),
            five_minute: Track::new(TrackKind::FiveMinute),
            hour: Track::new(TrackKind::Hour),
            ball_count: usize::from(ball_count),
        }
    }

    /// Assemble a state from already-validated parts
    pub(crate) fn from_parts(
        main: VecDeque<BallId>,
        minute: Track,
        five_minute: Track,
        hour: Track,
    ) -> Self {
        let ball_count = main.len() + minute.len() + five_minute.len() + hour.len();
        Self {
            main,
            minute,
            five_minute,
            hour,
            ball_count,
        }
    }

    pub fn ball_count(&self) -> usize {
        self.ball_count
    }

    pub fn main(&self) -> &VecDeque<BallId> {
        &self.main
    }

    pub fn minute(&self) -> &Track {
        &self.minute
    }

    pub fn five_minute(&self) -> &Track {
        &self.five_minute
    }

    pub fn hour(&self) -> &Track {
        &self.hour
    }

    /// Look up a track by tier
    pub fn track(&self, kind: TrackKind) -> &Track {
        match kind {
            TrackKind::Minute => &self.minute,
            TrackKind::FiveMinute => &self.five_minute,
            TrackKind::Hour => &self.hour,
        }
    }

    /// True when Minute, FiveMinute and Hour hold no balls
    pub fn tracks_empty(&self) -> bool {
        self.minute.is_empty() && self.five_minute.is_empty() && self.hour.is_empty()
    }

    /// Split borrow used by the engine: Main plus the tracks in travel order
    pub(crate) fn queues_mut(&mut self) -> (&mut VecDeque<BallId>, [&mut Track; 3]) {
        (
            &mut self.main,
            [&mut self.minute, &mut self.five_minute, &mut self.hour],
        )
    }

    /// Every ball currently in the clock, sorted ascending
    pub fn all_balls_sorted(&self) -> Vec<BallId> {
        let mut balls: Vec<BallId> = self
            .main
            .iter()
            .chain(self.minute.balls())
            .chain(self.five_minute.balls())
            .chain(self.hour.balls())
            .copied()
            .collect();
        balls.sort_unstable();
        balls
    }

    /// Check ball conservation and track capacity
    ///
    /// Returns a description of the first violation found.
    pub fn check_invariants(&self) -> Result<(), String> {
        for kind in TrackKind::ALL {
            let track = self.track(kind);
            if track.len() > track.capacity() {
                return Err(format!(
                    "{} track holds {} balls, capacity is {}",
                    kind,
                    track.len(),
                    track.capacity()
                ));
            }
        }

        let balls = self.all_balls_sorted();
        if balls.len() != self.ball_count {
            return Err(format!(
                "Ball count changed: expected {}, found {}",
                self.ball_count,
                balls.len()
            ));
        }
        for (index, ball) in balls.iter().enumerate() {
            let expected = index + 1;
            if usize::from(*ball) != expected {
                return Err(format!(
                    "Ball set is not 1..={}: expected ball {} at position {}, found {}",
                    self.ball_count, expected, index, ball
                ));
            }
        }

        Ok(())
    }
}
