//! Parameter sweep command

use std::path::Path;

use anyhow::Result;
use drivesim_core::{AccelerationSolver, sweep};
use tracing::info;

use crate::commands::{SweepArgs, resolve_vehicle};
use crate::output;

/// Execute the sweep command
pub fn execute(args: &SweepArgs, vehicle: Option<&Path>, json: bool) -> Result<()> {
    let vehicle = resolve_vehicle(vehicle)?;
    let base = args.params.resolve()?;
    let solver = AccelerationSolver::new(vehicle)?;

    let (low, high) = args.axis.default_range();
    let start = args.start.unwrap_or(low);
    let end = args.end.unwrap_or(high);
    info!(axis = args.axis.name(), start, end, steps = args.steps, "running sweep");

    let points = sweep(&solver, &base, args.axis, start, end, args.steps)?;
    output::print_sweep(args.axis, &points, json);
    Ok(())
}
