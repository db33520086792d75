//! Command implementations for drivesim CLI

pub mod evaluate;
pub mod motor;
pub mod sweep;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use drivesim_core::{SimulationParams, SweepAxis, VehicleConfig};
use drivesim_motor::MotorPreset;

use crate::config;

/// Simulation parameter flags shared by `evaluate` and `sweep`.
///
/// Flags override values from `--params`, which override the defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct ParamArgs {
    /// Wheel radius in metres
    #[arg(long)]
    pub wheel_radius: Option<f64>,

    /// Drive reduction ratio (motor turns per wheel turn)
    #[arg(long)]
    pub gearing: Option<f64>,

    /// Commanded top speed in m/s
    #[arg(long)]
    pub max_speed: Option<f64>,

    /// Current limit per motor in amps
    #[arg(long)]
    pub current_limit: Option<f64>,

    /// Parameter file (YAML or JSON, camelCase keys)
    #[arg(long)]
    pub params: Option<PathBuf>,
}

impl ParamArgs {
    /// Resolves the final parameter set.
    pub fn resolve(&self) -> Result<SimulationParams> {
        let mut params = match &self.params {
            Some(path) => config::load_params(path)?,
            None => SimulationParams::default(),
        };
        if let Some(v) = self.wheel_radius {
            params.wheel_radius = v;
        }
        if let Some(v) = self.gearing {
            params.drive_gearing = v;
        }
        if let Some(v) = self.max_speed {
            params.max_drive_speed = v;
        }
        if let Some(v) = self.current_limit {
            params.current_limit = v;
        }
        Ok(params)
    }
}

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub params: ParamArgs,
}

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Parameter to sweep
    #[arg(long, value_parser = parse_axis)]
    pub axis: SweepAxis,

    /// First value (defaults to the low end of the axis range)
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<f64>,

    /// Last value (defaults to the high end of the axis range)
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<f64>,

    /// Number of evaluated points, both ends included
    #[arg(long, default_value_t = 11)]
    pub steps: u32,

    #[command(flatten)]
    pub params: ParamArgs,
}

#[derive(Args, Debug)]
pub struct MotorArgs {
    /// Motor preset (defaults to the vehicle's motor)
    #[arg(long, value_parser = parse_preset)]
    pub preset: Option<MotorPreset>,

    /// Ganged motor count (defaults to the vehicle's motors per module)
    #[arg(long)]
    pub count: Option<u32>,

    /// Show the motor through this reduction
    #[arg(long)]
    pub gearing: Option<f64>,
}

fn parse_axis(s: &str) -> Result<SweepAxis, String> {
    s.parse().map_err(|e: drivesim_core::SimError| e.to_string())
}

fn parse_preset(s: &str) -> Result<MotorPreset, String> {
    s.parse().map_err(|e: drivesim_motor::MotorError| e.to_string())
}

/// Loads the vehicle from `path`, or the defaults.
pub fn resolve_vehicle(path: Option<&Path>) -> Result<VehicleConfig> {
    match path {
        Some(path) => config::load_vehicle(path),
        None => Ok(VehicleConfig::default()),
    }
}
