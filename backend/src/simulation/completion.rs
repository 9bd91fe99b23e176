//! Completion predicates
//!
//! Pure functions over an explicit clock state. The runner combines them with
//! the elapsed time to decide when a run ends.

use crate::core::time::ClockTime;
use crate::models::state::ClockState;

/// True iff Main is strictly ascending and Minute, FiveMinute, Hour are empty
///
/// All balls are distinct and Main started as `1..=N`, so strict ascent is
/// the same as equality with the starting order.
///
/// # Example
///
/// ```rust
/// use ball_clock_core::{BallClock, simulation::completion::is_initial_order};
///
/// let clock = BallClock::new(27).unwrap();
/// assert!(is_initial_order(clock.state()));
/// ```
pub fn is_initial_order(state: &ClockState) -> bool {
    if !state.tracks_empty() {
        return false;
    }
    let main = state.main();
    main.iter().zip(main.iter().skip(1)).all(|(a, b)| a < b)
}

/// Cycle-length mode: only checked on non-zero 60-minute boundaries
pub fn cycle_complete(state: &ClockState, time: ClockTime) -> bool {
    time.is_hour_boundary() && is_initial_order(state)
}

/// Fixed-horizon mode: the requested number of minutes has elapsed
pub fn horizon_reached(time: ClockTime, limit: u64) -> bool {
    time.minutes_elapsed() >= limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_never_complete_at_minute_zero() {
        let state = ClockState::new(30);
        assert!(is_initial_order(&state));
        assert!(!cycle_complete(&state, ClockTime::new()));
    }

    #[test]
    fn test_horizon_zero_is_reached_immediately() {
        assert!(horizon_reached(ClockTime::new(), 0));
        assert!(!horizon_reached(ClockTime::new(), 1));
    }
}
