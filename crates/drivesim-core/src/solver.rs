//! Peak standstill acceleration solver.
//!
//! The computation is closed form: one geared motor is built per call and
//! three independent ceilings (traction, back-EMF-reduced motor torque,
//! current cap) are resolved into a single acceleration figure.

use tracing::{debug, trace};

use crate::error::{SimError, SimResult};
use crate::params::SimulationParams;
use crate::result::{LimitingFactor, SimulationResult};
use crate::vehicle::VehicleConfig;

/// Evaluates [`SimulationParams`] against a fixed [`VehicleConfig`].
///
/// # Examples
///
/// ```
/// use drivesim_core::{AccelerationSolver, LimitingFactor, SimulationParams, VehicleConfig};
///
/// let solver = AccelerationSolver::new(VehicleConfig::default())?;
///
/// // Very tall reduction: the motor out-pushes the tyres
/// let result = solver.solve(&SimulationParams::default().with_drive_gearing(25.0))?;
/// assert_eq!(result.limiting_factor, LimitingFactor::Traction);
/// assert_eq!(result.max_force.to_bits(), result.traction_limit.to_bits());
/// # Ok::<(), drivesim_core::SimError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccelerationSolver {
    vehicle: VehicleConfig,
}

impl AccelerationSolver {
    /// Creates a solver for `vehicle`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidVehicle`](crate::SimError::InvalidVehicle)
    /// if the vehicle constants fail validation.
    pub fn new(vehicle: VehicleConfig) -> SimResult<Self> {
        vehicle.validate()?;
        Ok(Self { vehicle })
    }

    /// Vehicle constants in use.
    pub fn vehicle(&self) -> &VehicleConfig {
        &self.vehicle
    }

    /// Computes the peak acceleration from rest and the binding constraint.
    ///
    /// Forces in the result are per module. The back-EMF torque loss at top
    /// speed is subtracted from the stall-current torque, which biases the
    /// motor-torque estimate downward for a vehicle that does not stay at
    /// zero speed.
    ///
    /// # Errors
    ///
    /// - [`SimError::InvalidParameter`](crate::SimError::InvalidParameter) if
    ///   `params` fails [`SimulationParams::validate`]; nothing is computed
    /// - [`SimError::InvalidParameter`](crate::SimError::InvalidParameter)
    ///   for `drive_gearing` if the geared motor cannot be represented (a
    ///   reduction so extreme the torque or free speed overflows)
    /// - [`SimError::Motor`](crate::SimError::Motor) if the vehicle's base
    ///   motor cannot be built
    pub fn solve(&self, params: &SimulationParams) -> SimResult<SimulationResult> {
        params.validate()?;
        let vehicle = &self.vehicle;

        debug!(
            wheel_radius = params.wheel_radius,
            drive_gearing = params.drive_gearing,
            max_drive_speed = params.max_drive_speed,
            current_limit = params.current_limit,
            "solving peak acceleration"
        );

        let motor = vehicle
            .base_motor()?
            .with_reduction(params.drive_gearing)
            .map_err(|e| {
                debug!(error = %e, "geared motor not representable");
                SimError::InvalidParameter {
                    name: "drive_gearing",
                    value: params.drive_gearing,
                    reason: "out of representable range",
                }
            })?;
        let current_cap = params.current_limit * f64::from(vehicle.motors_per_module);

        // Back-EMF at top speed; regeneration counts as no loss
        let wheel_speed = params.max_drive_speed / params.wheel_radius;
        let top_speed_current = motor
            .current(wheel_speed, vehicle.supply_voltage)
            .min(current_cap);
        let torque_loss = motor.torque(top_speed_current).max(0.0);

        let traction_limit = vehicle.traction_limit();

        let stall_current = motor.current(0.0, vehicle.supply_voltage).min(current_cap);

        let max_torque = stall_current * motor.torque_constant() - torque_loss;
        let motor_torque_force = max_torque / params.wheel_radius;

        let max_force = motor_torque_force.min(traction_limit);

        trace!(
            wheel_speed,
            top_speed_current,
            torque_loss,
            stall_current,
            max_torque,
            "drivetrain intermediates"
        );

        let limiting_factor =
            arbitrate(traction_limit, motor_torque_force, stall_current, current_cap);

        let max_accel = if max_force > 0.0 {
            max_force * f64::from(vehicle.num_modules) / vehicle.mass_kg
        } else {
            0.0
        };

        debug!(
            max_accel,
            max_force,
            traction_limit,
            motor_torque_force,
            limiting_factor = limiting_factor.label(),
            "solved peak acceleration"
        );

        Ok(SimulationResult {
            max_accel,
            limiting_factor,
            max_force,
            traction_limit,
            motor_torque_force,
        })
    }
}

/// Picks the binding constraint. Order matters: traction (strict `<`), then
/// the current cap, then motor torque.
#[expect(
    clippy::float_cmp,
    reason = "min() returns the cap bit-for-bit exactly when the cap binds"
)]
fn arbitrate(
    traction_limit: f64,
    motor_torque_force: f64,
    stall_current: f64,
    current_cap: f64,
) -> LimitingFactor {
    if traction_limit < motor_torque_force {
        LimitingFactor::Traction
    } else if stall_current == current_cap {
        LimitingFactor::CurrentLimit
    } else {
        LimitingFactor::MotorTorque
    }
}

/// Solves `params` against the default vehicle.
///
/// # Errors
///
/// See [`AccelerationSolver::solve`].
pub fn calculate_max_accel(params: &SimulationParams) -> SimResult<SimulationResult> {
    AccelerationSolver::default().solve(params)
}
