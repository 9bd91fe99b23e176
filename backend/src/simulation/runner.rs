//! Simulation runner
//!
//! Drives a [`BallClock`] in one of two modes:
//!
//! - **Cycle days**: tick until the ball order returns to its initial
//!   configuration, checking once per hour, and report the elapsed days.
//! - **Clock state**: tick a fixed number of minutes and report the snapshot.

use crate::analysis;
use crate::orchestrator::checkpoint::ClockSnapshot;
use crate::orchestrator::engine::BallClock;
use crate::simulation::completion;
use crate::simulation::config::{CycleStrategy, SimulationConfig, SimulationMode};
use crate::simulation::SimulationError;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationReport {
    /// Cycle-length mode result
    CycleDays {
        ball_count: usize,
        days: u64,
        minutes: u64,
    },

    /// Snapshot mode result
    ClockState {
        ball_count: usize,
        minutes: u64,
        snapshot: ClockSnapshot,
    },
}

impl SimulationReport {
    /// Minutes simulated to reach this result
    pub fn minutes(&self) -> u64 {
        match self {
            SimulationReport::CycleDays { minutes, .. } => *minutes,
            SimulationReport::ClockState { minutes, .. } => *minutes,
        }
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationReport::CycleDays {
                ball_count, days, ..
            } => write!(f, "{} balls cycle after {} days.", ball_count, days),
            SimulationReport::ClockState { snapshot, .. } => write!(f, "{}", snapshot),
        }
    }
}

/// Report plus wall-clock timing
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub report: SimulationReport,
    pub elapsed: Duration,
}

/// Validate `config` and run it to completion
///
/// # Example
///
/// ```rust
/// use ball_clock_core::simulation::{run, SimulationConfig};
///
/// let outcome = run(&SimulationConfig::new(30, 0)).unwrap();
/// assert_eq!(outcome.report.to_string(), "30 balls cycle after 15 days.");
/// ```
pub fn run(config: &SimulationConfig) -> Result<SimulationOutcome, SimulationError> {
    let mode = config.validate()?;
    let mut clock = BallClock::new(config.ball_count)?;

    info!(
        ball_count = config.ball_count,
        mode = ?mode,
        strategy = ?config.strategy,
        "BallClock simulation configured"
    );

    let started = Instant::now();
    let report = match mode {
        SimulationMode::CycleDays => match config.strategy {
            CycleStrategy::Simulate => run_until_cycle(&mut clock)?,
            CycleStrategy::Permutation => cycle_from_permutation(config.ball_count)?,
        },
        SimulationMode::ClockState { minutes } => run_for(&mut clock, minutes)?,
    };
    let elapsed = started.elapsed();

    info!(
        minutes = report.minutes(),
        elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        "Simulation completed"
    );

    Ok(SimulationOutcome { report, elapsed })
}

/// Caller-facing entry point: `(success, message)`
///
/// On success the message is the report line; on failure it is the error
/// text. Never panics.
///
/// # Example
///
/// ```rust
/// use ball_clock_core::simulation::run_simulation;
///
/// let (ok, message) = run_simulation(26, 0);
/// assert!(!ok);
/// assert_eq!(message, "Error - invalid ballCount specified for simulation");
/// ```
pub fn run_simulation(ball_count: i64, time_limit: i64) -> (bool, String) {
    match run(&SimulationConfig::new(ball_count, time_limit)) {
        Ok(outcome) => (true, outcome.report.to_string()),
        Err(e) => {
            error!(ball_count, time_limit, error = %e, "Simulation failed");
            (false, e.to_string())
        }
    }
}

/// Tick until the cycle predicate holds on an hour boundary
pub fn run_until_cycle(clock: &mut BallClock) -> Result<SimulationReport, SimulationError> {
    loop {
        clock.tick()?;
        if completion::cycle_complete(clock.state(), clock.time()) {
            break;
        }
    }

    Ok(SimulationReport::CycleDays {
        ball_count: clock.ball_count(),
        days: clock.time().days_elapsed(),
        minutes: clock.minutes_elapsed(),
    })
}

/// Tick until `minutes` have elapsed, then snapshot
pub fn run_for(clock: &mut BallClock, minutes: u64) -> Result<SimulationReport, SimulationError> {
    while !completion::horizon_reached(clock.time(), minutes) {
        clock.tick()?;
    }

    Ok(SimulationReport::ClockState {
        ball_count: clock.ball_count(),
        minutes: clock.minutes_elapsed(),
        snapshot: clock.snapshot(),
    })
}

fn cycle_from_permutation(ball_count: i64) -> Result<SimulationReport, SimulationError> {
    let cycle = analysis::cycle_length(ball_count)?;
    let ball_count = usize::try_from(ball_count).unwrap_or_default();

    Ok(SimulationReport::CycleDays {
        ball_count,
        days: cycle.days(),
        minutes: cycle.minutes(),
    })
}
