//! Manufacturer-characterized motors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MotorError, MotorResult};
use crate::motor::MotorSpec;
use crate::units::rpm_to_rad_per_sec;

/// Known motors with published stall/free characteristics at 12 V.
///
/// # Examples
///
/// ```
/// use drivesim_motor::MotorPreset;
///
/// let preset: MotorPreset = "neo-vortex".parse()?;
/// assert_eq!(preset, MotorPreset::NeoVortex);
///
/// let motor = preset.spec(2)?;
/// assert!((motor.stall_current() - 422.0).abs() < 1e-9);
/// # Ok::<(), drivesim_motor::MotorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotorPreset {
    /// REV NEO Vortex.
    #[default]
    NeoVortex,
    /// REV NEO.
    Neo,
    /// REV NEO 550.
    Neo550,
    /// CTRE Falcon 500.
    Falcon500,
    /// WCP Kraken X60.
    KrakenX60,
    /// CIM.
    Cim,
}

/// Per-motor figures: nominal V, stall N·m, stall A, free A, free RPM.
struct Characteristics {
    voltage: f64,
    stall_torque: f64,
    stall_current: f64,
    free_current: f64,
    free_speed_rpm: f64,
}

impl MotorPreset {
    /// Every preset, in display order.
    pub const ALL: [MotorPreset; 6] = [
        MotorPreset::NeoVortex,
        MotorPreset::Neo,
        MotorPreset::Neo550,
        MotorPreset::Falcon500,
        MotorPreset::KrakenX60,
        MotorPreset::Cim,
    ];

    /// Stable identifier used in config files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NeoVortex => "neo-vortex",
            Self::Neo => "neo",
            Self::Neo550 => "neo550",
            Self::Falcon500 => "falcon500",
            Self::KrakenX60 => "kraken-x60",
            Self::Cim => "cim",
        }
    }

    fn characteristics(&self) -> Characteristics {
        let (voltage, stall_torque, stall_current, free_current, free_speed_rpm) = match self {
            Self::NeoVortex => (12.0, 3.6, 211.0, 3.6, 6784.0),
            Self::Neo => (12.0, 2.6, 105.0, 1.8, 5676.0),
            Self::Neo550 => (12.0, 0.97, 100.0, 1.4, 11000.0),
            Self::Falcon500 => (12.0, 4.69, 257.0, 1.5, 6380.0),
            Self::KrakenX60 => (12.0, 7.09, 366.0, 2.0, 6000.0),
            Self::Cim => (12.0, 2.42, 133.0, 2.7, 5310.0),
        };
        Characteristics {
            voltage,
            stall_torque,
            stall_current,
            free_current,
            free_speed_rpm,
        }
    }

    /// Builds the [`MotorSpec`] for `motor_count` ganged units.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::InvalidMotorCount`] if `motor_count` is zero.
    pub fn spec(&self, motor_count: u32) -> MotorResult<MotorSpec> {
        let c = self.characteristics();
        MotorSpec::new(
            c.voltage,
            c.stall_torque,
            c.stall_current,
            c.free_current,
            rpm_to_rad_per_sec(c.free_speed_rpm),
            motor_count,
        )
    }
}

impl fmt::Display for MotorPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MotorPreset {
    type Err = MotorError;

    /// Case-insensitive; `-`, `_` and spaces are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().replace('-', "") == key)
            .ok_or_else(|| MotorError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_every_preset_builds() -> TestResult {
        for preset in MotorPreset::ALL {
            let motor = preset.spec(1)?;
            assert!(motor.speed_constant() > 0.0, "{preset}");
            assert!(motor.torque_constant() > 0.0, "{preset}");
        }
        Ok(())
    }

    #[test]
    fn test_name_round_trips_through_from_str() -> TestResult {
        for preset in MotorPreset::ALL {
            assert_eq!(preset.name().parse::<MotorPreset>()?, preset);
        }
        Ok(())
    }

    #[test]
    fn test_from_str_is_lenient() -> TestResult {
        assert_eq!("NEO_VORTEX".parse::<MotorPreset>()?, MotorPreset::NeoVortex);
        assert_eq!("Kraken X60".parse::<MotorPreset>()?, MotorPreset::KrakenX60);
        assert!(matches!(
            "window-motor".parse::<MotorPreset>(),
            Err(MotorError::UnknownPreset(_))
        ));
        Ok(())
    }

    #[test]
    fn test_serde_uses_kebab_case() -> TestResult {
        let json = serde_json::to_string(&MotorPreset::KrakenX60)?;
        assert_eq!(json, "\"kraken-x60\"");
        let decoded: MotorPreset = serde_json::from_str("\"neo-vortex\"")?;
        assert_eq!(decoded, MotorPreset::NeoVortex);
        Ok(())
    }

    #[test]
    fn test_zero_count_rejected() {
        assert_eq!(MotorPreset::Neo.spec(0), Err(MotorError::InvalidMotorCount));
    }
}
