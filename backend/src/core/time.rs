//! Time keeping for the ball clock
//!
//! The clock advances in discrete ticks of one minute each. This module
//! converts the elapsed-minute counter into days and answers the
//! boundary questions the simulation driver asks.

/// Minutes in one hour
pub const MINUTES_PER_HOUR: u64 = 60;

/// Minutes in one 12-hour turn of the clock face
pub const MINUTES_PER_HALF_DAY: u64 = 12 * MINUTES_PER_HOUR;

/// Minutes in one day
pub const MINUTES_PER_DAY: u64 = 24 * MINUTES_PER_HOUR;

/// Tracks elapsed simulated minutes
///
/// # Example
/// ```
/// use ball_clock_core::ClockTime;
///
/// let mut time = ClockTime::new();
/// assert_eq!(time.minutes_elapsed(), 0);
///
/// time.advance_minute();
/// assert_eq!(time.minutes_elapsed(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockTime {
    /// Total minutes elapsed since the clock was started
    minutes_elapsed: u64,
}

impl ClockTime {
    /// Create a clock reading of zero minutes
    pub fn new() -> Self {
        Self { minutes_elapsed: 0 }
    }

    /// Create a clock reading at an arbitrary minute (used when resuming)
    ///
    /// # Example
    /// ```
    /// use ball_clock_core::ClockTime;
    ///
    /// let time = ClockTime::at_minute(1_500);
    /// assert_eq!(time.days_elapsed(), 1);
    /// ```
    pub fn at_minute(minutes_elapsed: u64) -> Self {
        Self { minutes_elapsed }
    }

    /// Advance time by one minute
    pub fn advance_minute(&mut self) {
        self.minutes_elapsed += 1;
    }

    /// Total minutes since start
    pub fn minutes_elapsed(&self) -> u64 {
        self.minutes_elapsed
    }

    /// Whole days since start (truncating)
    ///
    /// # Example
    /// ```
    /// use ball_clock_core::ClockTime;
    ///
    /// let time = ClockTime::at_minute(21_600);
    /// assert_eq!(time.days_elapsed(), 15);
    /// ```
    pub fn days_elapsed(&self) -> u64 {
        self.minutes_elapsed / MINUTES_PER_DAY
    }

    /// True on a non-zero multiple of 60 minutes
    ///
    /// This is the only point at which the cycle predicate may be queried.
    ///
    /// # Example
    /// ```
    /// use ball_clock_core::ClockTime;
    ///
    /// assert!(!ClockTime::new().is_hour_boundary());
    /// assert!(ClockTime::at_minute(120).is_hour_boundary());
    /// assert!(!ClockTime::at_minute(121).is_hour_boundary());
    /// ```
    pub fn is_hour_boundary(&self) -> bool {
        self.minutes_elapsed > 0 && self.minutes_elapsed % MINUTES_PER_HOUR == 0
    }

    /// True on a non-zero multiple of 720 minutes
    pub fn is_half_day_boundary(&self) -> bool {
        self.minutes_elapsed > 0 && self.minutes_elapsed % MINUTES_PER_HALF_DAY == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_day_boundary_is_also_hour_boundary() {
        let time = ClockTime::at_minute(MINUTES_PER_HALF_DAY * 3);
        assert!(time.is_half_day_boundary());
        assert!(time.is_hour_boundary());
    }

    #[test]
    fn test_zero_is_not_a_boundary() {
        let time = ClockTime::new();
        assert!(!time.is_hour_boundary());
        assert!(!time.is_half_day_boundary());
    }
}
