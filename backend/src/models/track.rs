//! Track model
//!
//! A track is one tier of the clock face: a rail that holds up to a fixed
//! number of balls. Balls are appended in arrival order; when the track
//! releases, the most recently added ball falls out first.
//!
//! # Capacities
//!
//! | Track      | Capacity | Overflows on arrival number |
//! |------------|----------|-----------------------------|
//! | Minute     | 4        | 5                           |
//! | FiveMinute | 11       | 12                          |
//! | Hour       | 11       | 12                          |
//!
//! The Main reservoir is not a `Track`; it is a plain FIFO owned by
//! [`ClockState`](crate::models::state::ClockState).

use std::collections::VecDeque;
use std::fmt;
use thiserror::Error;

/// Ball identifier, always in `1..=ball_count`
pub type BallId = u8;

/// Balls held by the Minute track before it overflows
pub const MINUTE_CAPACITY: usize = 4;

/// Balls held by the FiveMinute track before it overflows
pub const FIVE_MINUTE_CAPACITY: usize = 11;

/// Balls held by the Hour track before it overflows
pub const HOUR_CAPACITY: usize = 11;

/// Which tier of the clock a track represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackKind {
    Minute,
    FiveMinute,
    Hour,
}

impl TrackKind {
    /// All tiers, in the order a ball travels through them
    pub const ALL: [TrackKind; 3] = [TrackKind::Minute, TrackKind::FiveMinute, TrackKind::Hour];

    /// Fixed capacity of this tier
    pub const fn capacity(self) -> usize {
        match self {
            TrackKind::Minute => MINUTE_CAPACITY,
            TrackKind::FiveMinute => FIVE_MINUTE_CAPACITY,
            TrackKind::Hour => HOUR_CAPACITY,
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackKind::Minute => write!(f, "Minute"),
            TrackKind::FiveMinute => write!(f, "FiveMinute"),
            TrackKind::Hour => write!(f, "Hour"),
        }
    }
}

/// Errors that can occur during track operations
#[derive(Debug, Error, PartialEq)]
pub enum TrackError {
    #[error("{track} track is full ({capacity} balls)")]
    Full { track: TrackKind, capacity: usize },
}

/// A fixed-capacity rail of balls
///
/// # Example
/// ```
/// use ball_clock_core::models::track::{Track, TrackKind};
/// use std::collections::VecDeque;
///
/// let mut minute = Track::new(TrackKind::Minute);
/// minute.push(3).unwrap();
/// minute.push(7).unwrap();
///
/// let mut main = VecDeque::new();
/// minute.release_into(&mut main);
/// assert_eq!(main, [7, 3]);
/// assert!(minute.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    kind: TrackKind,
    balls: Vec<BallId>,
}

impl Track {
    /// Create an empty track of the given tier
    pub fn new(kind: TrackKind) -> Self {
        Self {
            kind,
            balls: Vec::with_capacity(kind.capacity()),
        }
    }

    /// Rebuild a track from balls listed in arrival order
    ///
    /// # Errors
    ///
    /// Returns `TrackError::Full` if more balls are given than the tier holds.
    pub fn from_balls(kind: TrackKind, balls: Vec<BallId>) -> Result<Self, TrackError> {
        if balls.len() > kind.capacity() {
            return Err(TrackError::Full {
                track: kind,
                capacity: kind.capacity(),
            });
        }
        Ok(Self { kind, balls })
    }

    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    pub fn capacity(&self) -> usize {
        self.kind.capacity()
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// True when the next arrival will overflow the track
    pub fn is_full(&self) -> bool {
        self.balls.len() >= self.kind.capacity()
    }

    /// Balls in arrival order (oldest first)
    pub fn balls(&self) -> &[BallId] {
        &self.balls
    }

    /// Append a ball
    ///
    /// # Errors
    ///
    /// Returns `TrackError::Full` if the track is already at capacity. The
    /// engine checks `is_full()` first and releases instead.
    pub fn push(&mut self, ball: BallId) -> Result<(), TrackError> {
        if self.is_full() {
            return Err(TrackError::Full {
                track: self.kind,
                capacity: self.kind.capacity(),
            });
        }
        self.balls.push(ball);
        Ok(())
    }

    /// Empty the track onto the back of `main`, newest ball first
    ///
    /// Returns the number of balls released.
    pub fn release_into(&mut self, main: &mut VecDeque<BallId>) -> usize {
        let released = self.balls.len();
        main.extend(self.balls.drain(..).rev());
        released
    }
}
