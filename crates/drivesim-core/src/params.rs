//! Simulation input parameters.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Reference wheel radius (m), 1.5 in.
pub const DEFAULT_WHEEL_RADIUS: f64 = 0.0381;

/// Reference drive reduction.
pub const DEFAULT_DRIVE_GEARING: f64 = 5.143;

/// Reference commanded top speed (m/s).
pub const DEFAULT_MAX_DRIVE_SPEED: f64 = 4.5;

/// Reference per-motor current limit (A).
pub const DEFAULT_CURRENT_LIMIT: f64 = 40.0;

/// Drivetrain configuration to evaluate. SI units throughout.
///
/// # Examples
///
/// ```
/// use drivesim_core::SimulationParams;
///
/// let params = SimulationParams::default()
///     .with_drive_gearing(8.0)
///     .with_current_limit(60.0);
///
/// assert!((params.wheel_radius - 0.0381).abs() < f64::EPSILON);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationParams {
    /// Wheel radius (m). Must be positive.
    pub wheel_radius: f64,
    /// Gear reduction ratio (motor turns per wheel turn). Must be positive.
    pub drive_gearing: f64,
    /// Commanded top speed (m/s). Must be non-negative.
    pub max_drive_speed: f64,
    /// Current limit per motor (A). Must be positive.
    pub current_limit: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            wheel_radius: DEFAULT_WHEEL_RADIUS,
            drive_gearing: DEFAULT_DRIVE_GEARING,
            max_drive_speed: DEFAULT_MAX_DRIVE_SPEED,
            current_limit: DEFAULT_CURRENT_LIMIT,
        }
    }
}

impl SimulationParams {
    /// Creates a parameter set.
    pub fn new(
        wheel_radius: f64,
        drive_gearing: f64,
        max_drive_speed: f64,
        current_limit: f64,
    ) -> Self {
        Self {
            wheel_radius,
            drive_gearing,
            max_drive_speed,
            current_limit,
        }
    }

    /// Sets the wheel radius (m).
    pub fn with_wheel_radius(mut self, wheel_radius: f64) -> Self {
        self.wheel_radius = wheel_radius;
        self
    }

    /// Sets the drive reduction.
    pub fn with_drive_gearing(mut self, drive_gearing: f64) -> Self {
        self.drive_gearing = drive_gearing;
        self
    }

    /// Sets the commanded top speed (m/s).
    pub fn with_max_drive_speed(mut self, max_drive_speed: f64) -> Self {
        self.max_drive_speed = max_drive_speed;
        self
    }

    /// Sets the per-motor current limit (A).
    pub fn with_current_limit(mut self, current_limit: f64) -> Self {
        self.current_limit = current_limit;
        self
    }

    /// Checks every field against its domain.
    ///
    /// Only strict positivity (and finiteness) is enforced; physically
    /// implausible but positive values pass.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] naming the first offending
    /// field, checked in the order wheel radius, drive gearing, current
    /// limit, max drive speed.
    pub fn validate(&self) -> SimResult<()> {
        require_positive("wheel_radius", self.wheel_radius)?;
        require_positive("drive_gearing", self.drive_gearing)?;
        require_positive("current_limit", self.current_limit)?;

        if !self.max_drive_speed.is_finite() {
            return Err(SimError::InvalidParameter {
                name: "max_drive_speed",
                value: self.max_drive_speed,
                reason: "must be finite",
            });
        }
        if self.max_drive_speed < 0.0 {
            return Err(SimError::InvalidParameter {
                name: "max_drive_speed",
                value: self.max_drive_speed,
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}

fn require_positive(name: &'static str, value: f64) -> SimResult<()> {
    if !value.is_finite() {
        return Err(SimError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(SimError::InvalidParameter {
            name,
            value,
            reason: "must be positive",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn rejected_field(params: SimulationParams) -> Option<&'static str> {
        match params.validate() {
            Err(SimError::InvalidParameter { name, .. }) => Some(name),
            _ => None,
        }
    }

    #[test]
    fn test_default_is_valid() -> TestResult {
        SimulationParams::default().validate()?;
        Ok(())
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        let base = SimulationParams::default();
        assert_eq!(rejected_field(base.with_wheel_radius(0.0)), Some("wheel_radius"));
        assert_eq!(rejected_field(base.with_wheel_radius(-0.1)), Some("wheel_radius"));
        assert_eq!(rejected_field(base.with_drive_gearing(0.0)), Some("drive_gearing"));
        assert_eq!(rejected_field(base.with_current_limit(0.0)), Some("current_limit"));
        assert_eq!(rejected_field(base.with_current_limit(-5.0)), Some("current_limit"));
        assert_eq!(rejected_field(base.with_max_drive_speed(-1.0)), Some("max_drive_speed"));
    }

    #[test]
    fn test_non_finite_rejected() {
        let base = SimulationParams::default();
        assert_eq!(rejected_field(base.with_wheel_radius(f64::NAN)), Some("wheel_radius"));
        assert_eq!(rejected_field(base.with_drive_gearing(f64::INFINITY)), Some("drive_gearing"));
        assert_eq!(rejected_field(base.with_max_drive_speed(f64::NAN)), Some("max_drive_speed"));
    }

    #[test]
    fn test_zero_speed_and_implausible_values_accepted() -> TestResult {
        SimulationParams::default().with_max_drive_speed(0.0).validate()?;
        SimulationParams::new(3.0, 0.01, 500.0, 10_000.0).validate()?;
        Ok(())
    }

    #[test]
    fn test_serde_camel_case_with_defaults() -> TestResult {
        let params: SimulationParams =
            serde_json::from_str(r#"{"wheelRadius": 0.05, "driveGearing": 6.75}"#)?;
        assert_eq!(params.wheel_radius.to_bits(), 0.05f64.to_bits());
        assert_eq!(params.drive_gearing.to_bits(), 6.75f64.to_bits());
        assert_eq!(params.current_limit.to_bits(), DEFAULT_CURRENT_LIMIT.to_bits());

        let json = serde_json::to_value(SimulationParams::default())?;
        assert!(json.get("maxDriveSpeed").is_some());
        assert!(json.get("max_drive_speed").is_none());
        Ok(())
    }
}
