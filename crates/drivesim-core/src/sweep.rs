//! One-dimensional parameter sweeps.
//!
//! A sweep evaluates the solver at evenly spaced values of one parameter,
//! holding the others at a base configuration. Both ends are included.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{SimError, SimResult};
use crate::params::SimulationParams;
use crate::result::SimulationResult;
use crate::solver::AccelerationSolver;

/// Minimum number of points in a sweep.
pub const MIN_SWEEP_STEPS: u32 = 2;

/// Maximum number of points in a sweep.
pub const MAX_SWEEP_STEPS: u32 = 10_000;

/// Parameter varied by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SweepAxis {
    /// Wheel radius (m).
    WheelRadius,
    /// Drive reduction.
    #[serde(rename = "gearing")]
    DriveGearing,
    /// Commanded top speed (m/s).
    #[serde(rename = "max-speed")]
    MaxDriveSpeed,
    /// Per-motor current limit (A).
    CurrentLimit,
}

impl SweepAxis {
    /// Every axis.
    pub const ALL: [SweepAxis; 4] = [
        SweepAxis::WheelRadius,
        SweepAxis::DriveGearing,
        SweepAxis::MaxDriveSpeed,
        SweepAxis::CurrentLimit,
    ];

    /// Command-line identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Self::WheelRadius => "wheel-radius",
            Self::DriveGearing => "gearing",
            Self::MaxDriveSpeed => "max-speed",
            Self::CurrentLimit => "current-limit",
        }
    }

    /// Unit suffix for display.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::WheelRadius => "m",
            Self::DriveGearing => ":1",
            Self::MaxDriveSpeed => "m/s",
            Self::CurrentLimit => "A",
        }
    }

    /// Range an interactive front end offers for this axis.
    pub fn default_range(&self) -> (f64, f64) {
        match self {
            Self::WheelRadius => (0.02, 0.15),
            Self::DriveGearing => (1.0, 25.0),
            Self::MaxDriveSpeed => (1.0, 12.0),
            Self::CurrentLimit => (10.0, 120.0),
        }
    }

    /// Reads this axis from `params`.
    pub fn get(&self, params: &SimulationParams) -> f64 {
        match self {
            Self::WheelRadius => params.wheel_radius,
            Self::DriveGearing => params.drive_gearing,
            Self::MaxDriveSpeed => params.max_drive_speed,
            Self::CurrentLimit => params.current_limit,
        }
    }

    /// Returns `params` with this axis set to `value`.
    pub fn apply(&self, params: SimulationParams, value: f64) -> SimulationParams {
        match self {
            Self::WheelRadius => params.with_wheel_radius(value),
            Self::DriveGearing => params.with_drive_gearing(value),
            Self::MaxDriveSpeed => params.with_max_drive_speed(value),
            Self::CurrentLimit => params.with_current_limit(value),
        }
    }
}

impl fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SweepAxis {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "wheel-radius" | "radius" => Ok(Self::WheelRadius),
            "gearing" | "drive-gearing" => Ok(Self::DriveGearing),
            "max-speed" | "max-drive-speed" => Ok(Self::MaxDriveSpeed),
            "current-limit" | "current" => Ok(Self::CurrentLimit),
            _ => Err(SimError::InvalidSweep(format!("unknown axis '{s}'"))),
        }
    }
}

/// One evaluated sweep sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepPoint {
    /// Value of the swept parameter.
    pub value: f64,
    /// Solver output at that value.
    pub result: SimulationResult,
}

/// Evaluates `solver` at `steps` evenly spaced values of `axis` from
/// `start` to `end` inclusive, other parameters taken from `base`.
///
/// `start` may exceed `end` for a descending sweep.
///
/// # Examples
///
/// ```
/// use drivesim_core::{sweep, AccelerationSolver, SimulationParams, SweepAxis};
///
/// let solver = AccelerationSolver::default();
/// let points = sweep(&solver, &SimulationParams::default(), SweepAxis::DriveGearing, 4.0, 12.0, 5)?;
///
/// assert_eq!(points.len(), 5);
/// assert!((points[2].value - 8.0).abs() < 1e-12);
/// # Ok::<(), drivesim_core::SimError>(())
/// ```
///
/// # Errors
///
/// - [`SimError::InvalidSweep`] if a bound is not finite or `steps` is
///   outside [`MIN_SWEEP_STEPS`]..=[`MAX_SWEEP_STEPS`]
/// - any solver error at any point; the whole sweep is rejected
pub fn sweep(
    solver: &AccelerationSolver,
    base: &SimulationParams,
    axis: SweepAxis,
    start: f64,
    end: f64,
    steps: u32,
) -> SimResult<Vec<SweepPoint>> {
    if !start.is_finite() || !end.is_finite() {
        return Err(SimError::InvalidSweep(format!(
            "bounds must be finite, got {start}..{end}"
        )));
    }
    if !(MIN_SWEEP_STEPS..=MAX_SWEEP_STEPS).contains(&steps) {
        return Err(SimError::InvalidSweep(format!(
            "steps must be between {MIN_SWEEP_STEPS} and {MAX_SWEEP_STEPS}, got {steps}"
        )));
    }

    let last = steps.saturating_sub(1);
    let span = end - start;

    (0..=last)
        .map(|i| {
            let value = if i == last {
                end
            } else {
                start + span * (f64::from(i) / f64::from(last))
            };
            let params = axis.apply(*base, value);
            solver
                .solve(&params)
                .map(|result| SweepPoint { value, result })
                .inspect_err(|e| warn!(axis = axis.name(), value, error = %e, "sweep point rejected"))
        })
        .collect()
}

/// First point with the highest acceleration, if any.
pub fn peak_acceleration(points: &[SweepPoint]) -> Option<&SweepPoint> {
    points.iter().fold(None, |best: Option<&SweepPoint>, point| match best {
        Some(b) if b.result.max_accel >= point.result.max_accel => Some(b),
        _ => Some(point),
    })
}
