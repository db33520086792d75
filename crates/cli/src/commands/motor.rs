//! Motor constants command

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::commands::{MotorArgs, resolve_vehicle};
use crate::error::CliError;
use crate::output;

/// Execute the motor command
pub fn execute(args: &MotorArgs, vehicle: Option<&Path>, json: bool) -> Result<()> {
    let vehicle = resolve_vehicle(vehicle)?;
    let preset = args.preset.unwrap_or(vehicle.motor);
    let count = args.count.unwrap_or(vehicle.motors_per_module);
    if count == 0 {
        return Err(CliError::InvalidArgument("--count must be at least 1".into()).into());
    }

    let motor = preset.spec(count)?;
    debug!(motor = preset.name(), count, "built motor spec");

    let geared = args
        .gearing
        .map(|ratio| motor.with_reduction(ratio).map(|geared| (ratio, geared)))
        .transpose()?;

    output::print_motor(
        preset.name(),
        &motor,
        geared.as_ref().map(|(ratio, spec)| (*ratio, spec)),
        vehicle.supply_voltage,
        json,
    );
    Ok(())
}
