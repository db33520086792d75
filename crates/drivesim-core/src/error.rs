//! Error types for the acceleration solver.

use drivesim_motor::MotorError;
use thiserror::Error;

/// Errors surfaced by the solver and sweeps.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A simulation parameter is outside its allowed domain.
    ///
    /// Raised before any computation; no result is produced.
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name in snake_case.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Which rule the value broke.
        reason: &'static str,
    },

    /// Vehicle constants failed validation.
    #[error("Invalid vehicle configuration: {0}")]
    InvalidVehicle(String),

    /// Sweep bounds or step count are unusable.
    #[error("Invalid sweep: {0}")]
    InvalidSweep(String),

    /// The geared motor could not be built.
    #[error(transparent)]
    Motor(#[from] MotorError),
}

impl SimError {
    /// Returns `true` for [`SimError::InvalidParameter`].
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

/// Result alias for solver operations.
pub type SimResult<T> = Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = SimError::InvalidParameter {
            name: "wheel_radius",
            value: 0.0,
            reason: "must be positive",
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter wheel_radius = 0: must be positive"
        );
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_motor_error_is_transparent() {
        let err: SimError = MotorError::InvalidReduction(0.0).into();
        assert_eq!(err.to_string(), MotorError::InvalidReduction(0.0).to_string());
        assert!(!err.is_invalid_parameter());
    }
}
