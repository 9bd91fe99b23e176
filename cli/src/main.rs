//! Ball Clock CLI
//!
//! Runs the ball clock in one of two modes:
//! - `--balls N`: report how many days until the balls return to order
//! - `--balls N --minutes M`: print the clock state after M minutes

mod logging;

use anyhow::{bail, Context, Result};
use ball_clock_core::simulation::{self, CycleStrategy, SimulationConfig};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use logging::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "ballclock")]
#[command(about = "Ball clock puzzle simulator")]
#[command(version)]
struct Cli {
    /// Number of balls in the clock (27-127)
    #[arg(short, long, allow_negative_numbers = true)]
    balls: Option<i64>,

    /// Minutes to run before printing the clock state; 0 finds the cycle length
    #[arg(short, long, allow_negative_numbers = true)]
    minutes: Option<i64>,

    /// Cycle-length algorithm
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// JSON file holding a simulation config; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Print wall-clock time after the result
    #[arg(long)]
    timing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Simulate,
    Permutation,
}

impl From<StrategyArg> for CycleStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Simulate => CycleStrategy::Simulate,
            StrategyArg::Permutation => CycleStrategy::Permutation,
        }
    }
}

/// Merge the config file (if any) with command-line flags
fn resolve_config(cli: &Cli) -> Result<SimulationConfig> {
    let base = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            Some(
                SimulationConfig::from_json(&json)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?,
            )
        }
        None => None,
    };

    let ball_count = match (cli.balls, base) {
        (Some(balls), _) => balls,
        (None, Some(config)) => config.ball_count,
        (None, None) => bail!("No ball count given: pass --balls or --config"),
    };

    let mut config = base.unwrap_or_else(|| SimulationConfig::new(ball_count, 0));
    config.ball_count = ball_count;
    if let Some(minutes) = cli.minutes {
        config.time_limit = minutes;
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy.into();
    }

    Ok(config)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    logging::initialize_logging(&cli.log_level, cli.log_format)
        .context("Failed to initialize logging")?;

    let config = resolve_config(&cli).context("Failed to load configuration")?;

    match simulation::run(&config) {
        Ok(outcome) => {
            println!("{}", outcome.report);
            if cli.timing {
                let seconds = outcome.elapsed.as_secs_f64();
                println!(
                    "Completed in {} milliseconds ({:.3} seconds)",
                    outcome.elapsed.as_millis(),
                    seconds
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            debug!(error = %e, "Simulation failed");
            println!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_balls_only_selects_cycle_mode() {
        let cli = Cli::try_parse_from(["ballclock", "--balls", "30"]).unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config, SimulationConfig::new(30, 0));
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["ballclock", "-b", "30", "-m", "325"]).unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.ball_count, 30);
        assert_eq!(config.time_limit, 325);
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let cli = Cli::try_parse_from(["ballclock", "--balls", "-1", "--minutes", "-2"]).unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.ball_count, -1);
        assert_eq!(config.time_limit, -2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_failure_prints_caller_facing_message() {
        let cli = Cli::try_parse_from(["ballclock", "--balls", "200"]).unwrap();
        let config = resolve_config(&cli).unwrap();
        let err = simulation::run(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error - invalid ballCount specified for simulation"
        );
    }

    #[test]
    fn test_strategy_flag() {
        let cli =
            Cli::try_parse_from(["ballclock", "--balls", "45", "--strategy", "permutation"]).unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.strategy, CycleStrategy::Permutation);
    }

    #[test]
    fn test_missing_ball_count_is_an_error() {
        let cli = Cli::try_parse_from(["ballclock"]).unwrap();
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn test_config_file_with_flag_override() {
        let path = std::env::temp_dir().join(format!("ballclock-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"ball_count": 45, "time_limit": 100}"#).unwrap();

        let cli = Cli::try_parse_from([
            "ballclock",
            "--config",
            path.to_str().unwrap(),
            "--minutes",
            "325",
        ])
        .unwrap();
        let config = resolve_config(&cli).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.ball_count, 45);
        assert_eq!(config.time_limit, 325);
    }

    #[test]
    fn test_log_format_flag() {
        let cli = Cli::try_parse_from(["ballclock", "-b", "30", "--log-format", "json"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
    }
}
