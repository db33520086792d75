//! DC motor value type.

use serde::Serialize;

use crate::error::{MotorError, MotorResult};
use crate::presets::MotorPreset;

/// Permanent-magnet DC motor (or a ganged set of identical motors) with a
/// linear torque/current/speed relationship.
///
/// Stall torque, stall current and free current are scaled by the motor
/// count; free speed is not, since ganged motors share one shaft speed.
/// Resistance, torque constant and speed constant are derived once at
/// construction.
///
/// # Examples
///
/// ```
/// use drivesim_motor::MotorSpec;
///
/// let pair = MotorSpec::new(12.0, 2.0, 100.0, 2.0, 500.0, 2)?;
/// assert_eq!(pair.motor_count(), 2);
/// assert!((pair.stall_current() - 200.0).abs() < 1e-12);
/// assert!((pair.resistance() - 0.06).abs() < 1e-12);
/// # Ok::<(), drivesim_motor::MotorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotorSpec {
    nominal_voltage: f64,
    stall_torque: f64,
    stall_current: f64,
    free_current: f64,
    free_speed: f64,
    motor_count: u32,
    resistance: f64,
    torque_constant: f64,
    speed_constant: f64,
}

impl MotorSpec {
    /// Builds a motor from manufacturer constants.
    ///
    /// `stall_torque` (N·m), `stall_current` (A) and `free_current` (A) are
    /// per-motor figures and get multiplied by `motor_count`. `free_speed` is
    /// in rad/s.
    ///
    /// # Errors
    ///
    /// - [`MotorError::InvalidMotorCount`] if `motor_count` is zero
    /// - [`MotorError::InvalidConstant`] if a constant is non-finite, or the
    ///   voltage, stall torque, stall current or free speed is not positive,
    ///   or the free current is negative
    /// - [`MotorError::BackEmfExceedsSupply`] if
    ///   `nominal_voltage <= resistance × free_current`
    pub fn new(
        nominal_voltage: f64,
        stall_torque: f64,
        stall_current: f64,
        free_current: f64,
        free_speed: f64,
        motor_count: u32,
    ) -> MotorResult<Self> {
        if motor_count == 0 {
            return Err(MotorError::InvalidMotorCount);
        }

        let count = f64::from(motor_count);
        let stall_torque = stall_torque * count;
        let stall_current = stall_current * count;
        let free_current = free_current * count;

        require_positive("nominal_voltage", nominal_voltage)?;
        require_positive("stall_torque", stall_torque)?;
        require_positive("stall_current", stall_current)?;
        require_positive("free_speed", free_speed)?;
        if !free_current.is_finite() || free_current < 0.0 {
            return Err(MotorError::InvalidConstant {
                name: "free_current",
                value: free_current,
            });
        }

        let resistance = nominal_voltage / stall_current;
        let resistive_drop = resistance * free_current;
        if nominal_voltage <= resistive_drop {
            return Err(MotorError::BackEmfExceedsSupply {
                nominal_voltage,
                resistive_drop,
            });
        }

        Ok(Self {
            nominal_voltage,
            stall_torque,
            stall_current,
            free_current,
            free_speed,
            motor_count,
            resistance,
            torque_constant: stall_torque / stall_current,
            speed_constant: free_speed / (nominal_voltage - resistive_drop),
        })
    }

    /// REV NEO Vortex brushless motor, `motor_count` units ganged.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::InvalidMotorCount`] if `motor_count` is zero.
    pub fn neo_vortex(motor_count: u32) -> MotorResult<Self> {
        MotorPreset::NeoVortex.spec(motor_count)
    }

    /// Current drawn at `speed` (rad/s) under `voltage` (V).
    ///
    /// Steady-state solution of `V = I·R + ω / Kv`. Goes negative once the
    /// shaft spins faster than the free speed at that voltage.
    pub fn current(&self, speed: f64, voltage: f64) -> f64 {
        voltage / self.resistance - speed / (self.speed_constant * self.resistance)
    }

    /// Shaft torque produced by `current` (A). Negative current gives
    /// negative (regenerative) torque.
    pub fn torque(&self, current: f64) -> f64 {
        current * self.torque_constant
    }

    /// Zero-load shaft speed at `voltage`, where the motor draws only its
    /// free current.
    pub fn free_speed_at(&self, voltage: f64) -> f64 {
        (voltage - self.resistance * self.free_current) * self.speed_constant
    }

    /// Locked-rotor torque at `voltage`.
    pub fn stall_torque_at(&self, voltage: f64) -> f64 {
        self.torque(self.current(0.0, voltage))
    }

    /// Returns the motor as seen through a lossless gear reduction of
    /// `ratio`:1.
    ///
    /// Stall torque is multiplied and free speed divided by `ratio`; voltage
    /// and currents are unchanged. The ganging is already folded into the
    /// figures, so the derived motor has a count of 1. `self` is untouched.
    ///
    /// # Errors
    ///
    /// - [`MotorError::InvalidReduction`] if `ratio` is not finite and positive
    /// - [`MotorError::InvalidConstant`] if the scaled torque or speed leaves
    ///   the representable range
    pub fn with_reduction(&self, ratio: f64) -> MotorResult<Self> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(MotorError::InvalidReduction(ratio));
        }
        Self::new(
            self.nominal_voltage,
            self.stall_torque * ratio,
            self.stall_current,
            self.free_current,
            self.free_speed / ratio,
            1,
        )
    }

    /// Rated supply voltage (V).
    pub fn nominal_voltage(&self) -> f64 {
        self.nominal_voltage
    }

    /// Stall torque (N·m), including ganging and reduction.
    pub fn stall_torque(&self) -> f64 {
        self.stall_torque
    }

    /// Stall current (A), including ganging.
    pub fn stall_current(&self) -> f64 {
        self.stall_current
    }

    /// Free current (A), including ganging.
    pub fn free_current(&self) -> f64 {
        self.free_current
    }

    /// Free speed (rad/s) at nominal voltage, after reduction.
    pub fn free_speed(&self) -> f64 {
        self.free_speed
    }

    /// Number of ganged motors folded into this value.
    pub fn motor_count(&self) -> u32 {
        self.motor_count
    }

    /// Winding resistance (Ω).
    pub fn resistance(&self) -> f64 {
        self.resistance
    }

    /// Torque constant Kt (N·m/A).
    pub fn torque_constant(&self) -> f64 {
        self.torque_constant
    }

    /// Speed constant Kv (rad/s per V).
    pub fn speed_constant(&self) -> f64 {
        self.speed_constant
    }
}

fn require_positive(name: &'static str, value: f64) -> MotorResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MotorError::InvalidConstant { name, value })
    }
}
