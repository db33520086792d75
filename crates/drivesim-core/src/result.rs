//! Solver output types.

use std::fmt;

use drivesim_motor::units::mps2_to_fps2;
use serde::{Deserialize, Serialize};

/// Constraint that caps the realized acceleration.
///
/// # Examples
///
/// ```
/// use drivesim_core::LimitingFactor;
///
/// assert_eq!(LimitingFactor::default(), LimitingFactor::None);
/// assert_eq!(LimitingFactor::CurrentLimit.to_string(), "Current Limit");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LimitingFactor {
    /// Motor force exceeds what the contact patch can hold; wheels slip.
    Traction,
    /// Back-EMF-reduced motor torque is the ceiling.
    MotorTorque,
    /// The configured current cap throttles the motor.
    CurrentLimit,
    /// No factor determined.
    #[default]
    None,
}

impl LimitingFactor {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Traction => "Traction",
            Self::MotorTorque => "Motor Torque",
            Self::CurrentLimit => "Current Limit",
            Self::None => "None",
        }
    }

    /// One-line explanation of the bottleneck.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Traction => "Wheels are spinning. You have more torque than grip!",
            Self::CurrentLimit => "Electronic caps are throttling motor performance.",
            Self::MotorTorque => {
                "Motor torque is the primary limiting factor for this configuration."
            }
            Self::None => "No limiting factor was determined.",
        }
    }
}

impl fmt::Display for LimitingFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Peak standstill acceleration and the forces behind it.
///
/// Forces are per traction module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Peak acceleration (m/s²). Never negative.
    pub max_accel: f64,
    /// Constraint that set `max_accel`.
    pub limiting_factor: LimitingFactor,
    /// Force realized at the ground (N): `min(motor_torque_force, traction_limit)`.
    pub max_force: f64,
    /// Force the contact patch holds before slipping (N).
    pub traction_limit: f64,
    /// Force the motor could deliver with unlimited grip (N).
    pub motor_torque_force: f64,
}

impl SimulationResult {
    /// Peak acceleration in ft/s².
    pub fn max_accel_fps2(&self) -> f64 {
        mps2_to_fps2(self.max_accel)
    }

    /// Returns `true` when wheel slip, not the drivetrain, caps acceleration.
    pub fn is_traction_limited(&self) -> bool {
        self.limiting_factor == LimitingFactor::Traction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_labels() {
        assert_eq!(LimitingFactor::Traction.label(), "Traction");
        assert_eq!(LimitingFactor::MotorTorque.label(), "Motor Torque");
        assert_eq!(LimitingFactor::CurrentLimit.label(), "Current Limit");
        assert_eq!(LimitingFactor::None.label(), "None");
    }

    #[test]
    fn test_descriptions_differ() {
        assert_ne!(
            LimitingFactor::Traction.description(),
            LimitingFactor::CurrentLimit.description()
        );
        assert!(LimitingFactor::Traction.description().contains("grip"));
    }

    #[test]
    fn test_result_serializes_camel_case() -> TestResult {
        let result = SimulationResult {
            max_accel: 2.5,
            limiting_factor: LimitingFactor::MotorTorque,
            max_force: 13.75,
            traction_limit: 64.0,
            motor_torque_force: 13.75,
        };
        let json = serde_json::to_value(result)?;
        assert_eq!(json["limitingFactor"], "MotorTorque");
        assert_eq!(json["maxAccel"], 2.5);
        assert!(json.get("motorTorqueForce").is_some());

        let decoded: SimulationResult = serde_json::from_value(json)?;
        assert_eq!(decoded, result);
        Ok(())
    }

    #[test]
    fn test_imperial_acceleration() {
        let result = SimulationResult {
            max_accel: 1.0,
            limiting_factor: LimitingFactor::Traction,
            max_force: 0.0,
            traction_limit: 0.0,
            motor_torque_force: 0.0,
        };
        assert!((result.max_accel_fps2() - 3.28084).abs() < 1e-12);
        assert!(result.is_traction_limited());
    }
}
