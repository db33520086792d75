//! Error types for motor construction and transforms.

use thiserror::Error;

/// Errors raised while building or transforming a [`MotorSpec`](crate::MotorSpec).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotorError {
    /// A motor constant is non-finite or outside its physical range.
    #[error("Invalid motor constant {name}: {value}")]
    InvalidConstant {
        /// Constant name (e.g. `stall_current`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The resistive drop at free current consumes the whole supply, so the
    /// speed constant would be infinite or negative.
    #[error(
        "Nominal voltage {nominal_voltage} V does not exceed resistive drop {resistive_drop} V at free current"
    )]
    BackEmfExceedsSupply {
        /// Rated supply voltage.
        nominal_voltage: f64,
        /// `resistance × free_current`.
        resistive_drop: f64,
    },

    /// Gear reduction ratio is zero, negative or non-finite.
    #[error("Gear reduction must be finite and positive, got {0}")]
    InvalidReduction(f64),

    /// Motor count of zero.
    #[error("Motor count must be at least 1")]
    InvalidMotorCount,

    /// Preset name did not match any known motor.
    #[error("Unknown motor preset: {0}")]
    UnknownPreset(String),
}

/// Result alias for motor operations.
pub type MotorResult<T> = Result<T, MotorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_constant() {
        let err = MotorError::InvalidConstant {
            name: "stall_current",
            value: 0.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("stall_current"));
        assert!(msg.contains('0'));
    }

    #[test]
    fn test_error_display_reduction() {
        let err = MotorError::InvalidReduction(-2.0);
        assert_eq!(
            err.to_string(),
            "Gear reduction must be finite and positive, got -2"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err = MotorError::InvalidMotorCount;
        let _: &dyn std::error::Error = &err;
    }
}
