//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use drivesim_core::{
    LimitingFactor, SimulationParams, SimulationResult, SweepAxis, SweepPoint, VehicleConfig,
    peak_acceleration,
};
use drivesim_motor::MotorSpec;
use drivesim_motor::units::{meters_to_inches, mps_to_fps, rad_per_sec_to_rpm};
use serde_json::{Map, Value, json};

use crate::error::error_kind;

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Failed to format output as JSON: {}", e),
    }
}

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    print_json(&json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_kind(error)
        }
    }));
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

fn factor_colored(factor: LimitingFactor) -> ColoredString {
    match factor {
        LimitingFactor::Traction => factor.label().yellow().bold(),
        LimitingFactor::MotorTorque => factor.label().green().bold(),
        LimitingFactor::CurrentLimit => factor.label().red().bold(),
        LimitingFactor::None => factor.label().dimmed(),
    }
}

/// Print a single solve result
pub fn print_result(
    params: &SimulationParams,
    vehicle: &VehicleConfig,
    result: &SimulationResult,
    json: bool,
) {
    if json {
        print_json(&json!({
            "success": true,
            "params": params,
            "vehicle": vehicle,
            "result": result,
        }));
        return;
    }

    println!("{}", "Drivetrain:".bold());
    println!(
        "  Wheel radius:   {:.4} m ({:.2} in)",
        params.wheel_radius,
        meters_to_inches(params.wheel_radius)
    );
    println!("  Gearing:        {:.3}:1", params.drive_gearing);
    println!(
        "  Max speed:      {:.2} m/s ({:.2} ft/s)",
        params.max_drive_speed,
        mps_to_fps(params.max_drive_speed)
    );
    println!("  Current limit:  {:.1} A", params.current_limit);
    println!(
        "  Motor:          {} x{} per module, {} modules",
        vehicle.motor.name(),
        vehicle.motors_per_module,
        vehicle.num_modules
    );
    println!();
    println!("{}", "Result:".bold());
    println!(
        "  Max acceleration: {} ({:.2} ft/s²)",
        format!("{:.3} m/s²", result.max_accel).cyan().bold(),
        result.max_accel_fps2()
    );
    println!(
        "  Limiting factor:  {}",
        factor_colored(result.limiting_factor)
    );
    println!("  Ground force:     {:.2} N per module", result.max_force);
    println!("  Traction limit:   {:.2} N", result.traction_limit);
    println!("  Motor force:      {:.2} N", result.motor_torque_force);
    println!();
    println!("  {}", result.limiting_factor.description().dimmed());
}

/// Print sweep results as a table followed by the peak
pub fn print_sweep(axis: SweepAxis, points: &[SweepPoint], json: bool) {
    let peak = peak_acceleration(points);

    if json {
        print_json(&json!({
            "success": true,
            "axis": axis,
            "points": points,
            "peak": peak,
        }));
        return;
    }

    if points.is_empty() {
        println!("{}", "No sweep points".yellow());
        return;
    }

    let header = format!("{} ({})", axis.name(), axis.unit());
    println!(
        "{}",
        format!(
            "{:>20}  {:>12}  {:>10}  {}",
            header, "accel m/s²", "force N", "limit"
        )
        .bold()
    );
    for point in points {
        println!(
            "{:>20.4}  {:>12.3}  {:>10.2}  {}",
            point.value,
            point.result.max_accel,
            point.result.max_force,
            factor_colored(point.result.limiting_factor)
        );
    }

    if let Some(peak) = peak {
        println!();
        println!(
            "{} {:.3} m/s² at {} = {:.4} {} ({})",
            "Peak:".bold(),
            peak.result.max_accel,
            axis.name(),
            peak.value,
            axis.unit(),
            peak.result.limiting_factor
        );
    }
}

/// Print derived motor constants, optionally through a reduction
pub fn print_motor(
    name: &str,
    motor: &MotorSpec,
    geared: Option<(f64, &MotorSpec)>,
    voltage: f64,
    json: bool,
) {
    if json {
        let mut output = Map::new();
        output.insert("success".into(), json!(true));
        output.insert("motor".into(), json!(name));
        output.insert("supplyVoltage".into(), json!(voltage));
        output.insert("spec".into(), motor_json(motor, voltage));
        if let Some((ratio, geared)) = geared {
            output.insert("gearing".into(), json!(ratio));
            output.insert("geared".into(), motor_json(geared, voltage));
        }
        print_json(&Value::Object(output));
        return;
    }

    println!(
        "{} {} x{}",
        "Motor:".bold(),
        name.cyan().bold(),
        motor.motor_count()
    );
    print_motor_human(motor, voltage);

    if let Some((ratio, geared)) = geared {
        println!();
        println!("{} {:.3}:1", "Through reduction".bold(), ratio);
        print_motor_human(geared, voltage);
    }
}

fn motor_json(motor: &MotorSpec, voltage: f64) -> Value {
    json!({
        "motorCount": motor.motor_count(),
        "nominalVoltage": motor.nominal_voltage(),
        "stallTorque": motor.stall_torque(),
        "stallCurrent": motor.stall_current(),
        "freeCurrent": motor.free_current(),
        "freeSpeed": motor.free_speed(),
        "resistance": motor.resistance(),
        "torqueConstant": motor.torque_constant(),
        "speedConstant": motor.speed_constant(),
        "freeSpeedAtSupply": motor.free_speed_at(voltage),
        "stallTorqueAtSupply": motor.stall_torque_at(voltage),
    })
}

fn print_motor_human(motor: &MotorSpec, voltage: f64) {
    println!(
        "  Stall:          {:.3} N·m at {:.1} A",
        motor.stall_torque(),
        motor.stall_current()
    );
    println!(
        "  Free speed:     {:.1} rad/s ({:.0} RPM) at {:.1} A",
        motor.free_speed(),
        rad_per_sec_to_rpm(motor.free_speed()),
        motor.free_current()
    );
    println!("  Resistance:     {:.5} Ω", motor.resistance());
    println!("  kT:             {:.5} N·m/A", motor.torque_constant());
    println!("  kV:             {:.4} rad/s/V", motor.speed_constant());
    println!(
        "  At {:.1} V:       {:.1} rad/s free, {:.3} N·m stall",
        voltage,
        motor.free_speed_at(voltage),
        motor.stall_torque_at(voltage)
    );
}
