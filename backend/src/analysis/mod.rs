//! Cycle analysis
//!
//! Every 720 minutes all balls are back in Main. The reordering Main goes
//! through over one such half-day depends only on positions, not on which
//! balls occupy them, so the same permutation repeats every half-day. The
//! clock returns to `1..=N` after `lcm(orbit lengths)` half-days.
//!
//! This gives the cycle length after simulating only 720 ticks, and serves as
//! a cross-check for the minute-by-minute runner.

use crate::core::time::{ClockTime, MINUTES_PER_HALF_DAY};
use crate::models::track::BallId;
use crate::orchestrator::engine::{BallClock, ClockError};
use thiserror::Error;

/// Errors that can occur during cycle analysis
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error(transparent)]
    Clock(#[from] ClockError),

    #[error("Balls still on tracks after {minutes} minutes")]
    TracksNotEmpty { minutes: u64 },

    #[error("Cycle length for {ball_count} balls overflows u64")]
    Overflow { ball_count: usize },
}

/// Cycle length in half-days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleLength {
    pub half_days: u64,
}

impl CycleLength {
    pub fn minutes(&self) -> u64 {
        self.half_days * MINUTES_PER_HALF_DAY
    }

    /// Whole days, truncating like the minute-by-minute report
    pub fn days(&self) -> u64 {
        ClockTime::at_minute(self.minutes()).days_elapsed()
    }
}

/// Main after 720 ticks from the initial state
///
/// Position `i` of the result holds the ball that started at position
/// `result[i] - 1`.
pub fn half_day_permutation(ball_count: i64) -> Result<Vec<BallId>, AnalysisError> {
    let mut clock = BallClock::new(ball_count)?;
    loop {
        clock.tick()?;
        if clock.time().is_half_day_boundary() {
            break;
        }
    }

    if !clock.state().tracks_empty() {
        return Err(AnalysisError::TracksNotEmpty {
            minutes: clock.minutes_elapsed(),
        });
    }

    Ok(clock.state().main().iter().copied().collect())
}

/// Lengths of the disjoint cycles of a permutation of `1..=N`
///
/// # Example
///
/// ```rust
/// use ball_clock_core::analysis::orbit_lengths;
///
/// // 1 -> 2 -> 1, 3 fixed
/// let mut lengths = orbit_lengths(&[2, 1, 3]);
/// lengths.sort();
/// assert_eq!(lengths, vec![1, 2]);
/// ```
pub fn orbit_lengths(permutation: &[BallId]) -> Vec<u64> {
    let mut visited = vec![false; permutation.len()];
    let mut lengths = Vec::new();

    for start in 0..permutation.len() {
        if visited[start] {
            continue;
        }
        let mut length = 0;
        let mut position = start;
        while !visited[position] {
            visited[position] = true;
            position = usize::from(permutation[position]) - 1;
            length += 1;
        }
        lengths.push(length);
    }

    lengths
}

/// Cycle length of a `ball_count` clock, from its half-day permutation
pub fn cycle_length(ball_count: i64) -> Result<CycleLength, AnalysisError> {
    let permutation = half_day_permutation(ball_count)?;

    let mut half_days: u64 = 1;
    for length in orbit_lengths(&permutation) {
        half_days = lcm(half_days, length).ok_or(AnalysisError::Overflow {
            ball_count: permutation.len(),
        })?;
    }

    Ok(CycleLength { half_days })
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

fn lcm(a: u64, b: u64) -> Option<u64> {
    (a / gcd(a, b)).checked_mul(b)
}
