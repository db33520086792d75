//! Single-configuration solve

use std::path::Path;

use anyhow::Result;
use drivesim_core::AccelerationSolver;
use tracing::info;

use crate::commands::{EvaluateArgs, resolve_vehicle};
use crate::output;

/// Execute the evaluate command
pub fn execute(args: &EvaluateArgs, vehicle: Option<&Path>, json: bool) -> Result<()> {
    let vehicle = resolve_vehicle(vehicle)?;
    let params = args.params.resolve()?;
    let solver = AccelerationSolver::new(vehicle)?;

    let result = solver.solve(&params)?;
    info!(
        max_accel = result.max_accel,
        limiting_factor = %result.limiting_factor,
        "evaluated drivetrain"
    );

    output::print_result(&params, solver.vehicle(), &result, json);
    Ok(())
}
