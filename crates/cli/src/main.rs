//! drivesim - drivetrain acceleration CLI
//!
//! Evaluates the peak standstill acceleration of a gear-reduced DC motor
//! drivetrain, sweeps parameters, and inspects motor constants.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod config;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{EvaluateArgs, MotorArgs, SweepArgs};

#[derive(Parser)]
#[command(name = "drivesim")]
#[command(about = "DriveSim - peak starting acceleration of a geared DC motor drivetrain")]
#[command(version)]
#[command(long_about = "
drivesim computes the maximum acceleration a wheeled vehicle can produce from
a standstill for a given wheel radius, gear reduction, top speed and current
limit, and reports whether traction, motor torque or the current limit is the
bottleneck.

Use --json for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Vehicle constants file (YAML or JSON)
    #[arg(long, global = true, env = "DRIVESIM_VEHICLE")]
    vehicle: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one drivetrain configuration
    Evaluate(EvaluateArgs),

    /// Evaluate a range of values for one parameter
    Sweep(SweepArgs),

    /// Show derived motor constants
    Motor(MotorArgs),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("drivesim={log_level},drivesim_core={log_level},drivesim_motor={log_level}")
                    .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            ExitCode::from(error::exit_code(&e))
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Evaluate(args) => {
            commands::evaluate::execute(args, cli.vehicle.as_deref(), cli.json)
        }
        Commands::Sweep(args) => commands::sweep::execute(args, cli.vehicle.as_deref(), cli.json),
        Commands::Motor(args) => commands::motor::execute(args, cli.vehicle.as_deref(), cli.json),
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    // --- Global flag parsing ---

    #[test]
    fn parse_evaluate_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["drivesim", "evaluate"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        assert!(matches!(cli.command, Commands::Evaluate(_)));
        Ok(())
    }

    #[test]
    fn parse_global_json_flag_after_subcommand() -> TestResult {
        let cli = Cli::try_parse_from(["drivesim", "evaluate", "--json"])?;
        assert!(cli.json);
        Ok(())
    }

    #[test]
    fn parse_verbose_levels() -> TestResult {
        let cli = Cli::try_parse_from(["drivesim", "-vv", "evaluate"])?;
        assert_eq!(cli.verbose, 2);
        Ok(())
    }

    #[test]
    fn parse_vehicle_path() -> TestResult {
        let cli = Cli::try_parse_from(["drivesim", "--vehicle", "robot.yaml", "motor"])?;
        assert_eq!(cli.vehicle, Some(PathBuf::from("robot.yaml")));
        Ok(())
    }

    // --- Subcommand argument parsing ---

    #[test]
    fn parse_evaluate_overrides() -> TestResult {
        let cli = Cli::try_parse_from([
            "drivesim",
            "evaluate",
            "--wheel-radius",
            "0.05",
            "--gearing",
            "8",
            "--current-limit",
            "60",
        ])?;
        let Commands::Evaluate(args) = cli.command else {
            return Err("expected evaluate".into());
        };
        assert_eq!(args.params.wheel_radius, Some(0.05));
        assert_eq!(args.params.gearing, Some(8.0));
        assert_eq!(args.params.current_limit, Some(60.0));
        assert_eq!(args.params.max_speed, None);
        Ok(())
    }

    #[test]
    fn parse_sweep_axis() -> TestResult {
        let cli = Cli::try_parse_from([
            "drivesim", "sweep", "--axis", "gearing", "--start", "2", "--end", "20", "--steps",
            "10",
        ])?;
        let Commands::Sweep(args) = cli.command else {
            return Err("expected sweep".into());
        };
        assert_eq!(args.axis, drivesim_core::SweepAxis::DriveGearing);
        assert_eq!(args.steps, 10);
        assert_eq!(args.start, Some(2.0));
        Ok(())
    }

    #[test]
    fn parse_sweep_rejects_unknown_axis() {
        assert!(Cli::try_parse_from(["drivesim", "sweep", "--axis", "mass"]).is_err());
    }

    #[test]
    fn parse_motor_preset() -> TestResult {
        let cli = Cli::try_parse_from([
            "drivesim", "motor", "--preset", "falcon500", "--count", "2",
        ])?;
        let Commands::Motor(args) = cli.command else {
            return Err("expected motor".into());
        };
        assert_eq!(args.preset, Some(drivesim_motor::MotorPreset::Falcon500));
        assert_eq!(args.count, Some(2));
        Ok(())
    }
}
