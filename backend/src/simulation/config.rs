//! Simulation configuration
//!
//! A run is described by a ball count and a time limit. A positive time limit
//! selects the fixed-horizon snapshot mode; zero selects cycle-length mode.

use crate::orchestrator::engine::validate_ball_count;
use crate::simulation::SimulationError;
use serde::{Deserialize, Serialize};

/// How cycle-length mode finds the cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleStrategy {
    /// Tick minute by minute, checking the order every hour
    #[default]
    Simulate,

    /// Derive the cycle from one 12-hour permutation of Main
    Permutation,
}

/// Complete run configuration
///
/// # Fields
///
/// * `ball_count` - Balls in the clock, 27 to 127 inclusive
/// * `time_limit` - Minutes to run in snapshot mode; 0 means cycle-length mode
/// * `strategy` - Cycle-length algorithm (ignored in snapshot mode)
///
/// # Example
///
/// ```rust
/// use ball_clock_core::simulation::{SimulationConfig, SimulationMode};
///
/// let config = SimulationConfig::new(30, 325);
/// assert_eq!(config.validate().unwrap(), SimulationMode::ClockState { minutes: 325 });
///
/// let config = SimulationConfig::new(30, 0);
/// assert_eq!(config.validate().unwrap(), SimulationMode::CycleDays);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub ball_count: i64,

    #[serde(default)]
    pub time_limit: i64,

    #[serde(default)]
    pub strategy: CycleStrategy,
}

/// What a validated configuration asks the runner to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationMode {
    /// Run until Main returns to `1..=N`, report days
    CycleDays,

    /// Run exactly `minutes` ticks, report the snapshot
    ClockState { minutes: u64 },
}

impl SimulationConfig {
    pub fn new(ball_count: i64, time_limit: i64) -> Self {
        Self {
            ball_count,
            time_limit,
            strategy: CycleStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: CycleStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Load from a JSON document such as `{"ball_count": 30, "time_limit": 325}`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate bounds and resolve the run mode
    ///
    /// # Errors
    ///
    /// * `InvalidBallCount` unless `27 <= ball_count <= 127`
    /// * `InvalidTimeLimit` if `time_limit` is negative
    pub fn validate(&self) -> Result<SimulationMode, SimulationError> {
        validate_ball_count(self.ball_count)?;

        let minutes = u64::try_from(self.time_limit).map_err(|_| {
            SimulationError::InvalidTimeLimit {
                time_limit: self.time_limit,
            }
        })?;

        Ok(if minutes > 0 {
            SimulationMode::ClockState { minutes }
        } else {
            SimulationMode::CycleDays
        })
    }
}
