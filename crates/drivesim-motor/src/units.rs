//! Unit conversions

use std::f64::consts::PI;

/// Inches per metre.
pub const INCHES_PER_METER: f64 = 39.3701;

/// Feet per metre.
pub const FEET_PER_METER: f64 = 3.28084;

/// Converts revolutions per minute to radians per second.
///
/// # Examples
///
/// ```
/// use drivesim_motor::units::rpm_to_rad_per_sec;
///
/// let w = rpm_to_rad_per_sec(60.0);
/// assert!((w - 2.0 * std::f64::consts::PI).abs() < 1e-12);
/// ```
pub fn rpm_to_rad_per_sec(rpm: f64) -> f64 {
    (rpm * 2.0 * PI) / 60.0
}

/// Converts radians per second to revolutions per minute.
pub fn rad_per_sec_to_rpm(rad_per_sec: f64) -> f64 {
    rad_per_sec * 60.0 / (2.0 * PI)
}

/// Converts metres to inches.
pub fn meters_to_inches(meters: f64) -> f64 {
    meters * INCHES_PER_METER
}

/// Converts metres per second to feet per second.
pub fn mps_to_fps(mps: f64) -> f64 {
    mps * FEET_PER_METER
}

/// Converts metres per second squared to feet per second squared.
pub fn mps2_to_fps2(mps2: f64) -> f64 {
    mps2 * FEET_PER_METER
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rpm_round_trip() {
        let rpm = 6784.0;
        assert_relative_eq!(rad_per_sec_to_rpm(rpm_to_rad_per_sec(rpm)), rpm, epsilon = 1e-9);
    }

    #[test]
    fn test_neo_vortex_free_speed() {
        assert_relative_eq!(rpm_to_rad_per_sec(6784.0), 710.4188, epsilon = 1e-3);
    }

    #[test]
    fn test_length_and_speed_conversions() {
        assert_relative_eq!(meters_to_inches(0.0381), 1.5, epsilon = 1e-3);
        assert_relative_eq!(mps_to_fps(4.5), 14.76378, epsilon = 1e-5);
        assert_relative_eq!(mps2_to_fps2(1.0), FEET_PER_METER);
    }
}
