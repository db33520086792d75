//! Vehicle and parameter file loading

use std::fs;
use std::path::Path;

use anyhow::Result;
use drivesim_core::{SimulationParams, VehicleConfig};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

fn detect_format(path: &Path) -> Result<Format, CliError> {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("yaml" | "yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        _ => Err(CliError::UnsupportedFormat(path.display().to_string())),
    }
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let format = detect_format(path)?;
    let text = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), ?format, bytes = text.len(), "loading config file");

    let parse_error = |reason: String| CliError::ConfigParse {
        path: path.display().to_string(),
        reason,
    };
    match format {
        Format::Yaml => serde_yaml::from_str(&text).map_err(|e| parse_error(e.to_string())),
        Format::Json => serde_json::from_str(&text).map_err(|e| parse_error(e.to_string())),
    }
}

/// Loads and validates vehicle constants.
pub fn load_vehicle(path: &Path) -> Result<VehicleConfig> {
    let vehicle: VehicleConfig = load(path)?;
    vehicle.validate()?;
    info!(
        path = %path.display(),
        mass_kg = vehicle.mass_kg,
        num_modules = vehicle.num_modules,
        motor = vehicle.motor.name(),
        "loaded vehicle"
    );
    Ok(vehicle)
}

/// Loads simulation parameters; validation happens at solve time.
pub fn load_params(path: &Path) -> Result<SimulationParams> {
    Ok(load(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drivesim_motor::MotorPreset;
    use std::io::Write;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn write_temp(suffix: &str, body: &str) -> Result<tempfile::NamedTempFile, std::io::Error> {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile()?;
        file.write_all(body.as_bytes())?;
        Ok(file)
    }

    #[test]
    fn loads_yaml_vehicle() -> TestResult {
        let file = write_temp(".yaml", "mass_kg: 30.0\nmotor: falcon500\n")?;
        let vehicle = load_vehicle(file.path())?;
        assert_eq!(vehicle.mass_kg.to_bits(), 30.0f64.to_bits());
        assert_eq!(vehicle.motor, MotorPreset::Falcon500);
        Ok(())
    }

    #[test]
    fn loads_json_params() -> TestResult {
        let file = write_temp(".json", r#"{"driveGearing": 8.45, "currentLimit": 60}"#)?;
        let params = load_params(file.path())?;
        assert_eq!(params.drive_gearing.to_bits(), 8.45f64.to_bits());
        assert_eq!(params.current_limit.to_bits(), 60.0f64.to_bits());
        Ok(())
    }

    #[test]
    fn rejects_invalid_vehicle() -> TestResult {
        let file = write_temp(".yml", "num_modules: 0\n")?;
        let err = load_vehicle(file.path()).err().ok_or("expected error")?;
        assert!(err.downcast_ref::<drivesim_core::SimError>().is_some());
        Ok(())
    }

    #[test]
    fn rejects_unknown_extension() {
        assert!(matches!(
            detect_format(Path::new("vehicle.toml")),
            Err(CliError::UnsupportedFormat(_))
        ));
        assert_eq!(detect_format(Path::new("V.YML")).ok(), Some(Format::Yaml));
    }

    #[test]
    fn reports_missing_file() {
        let result = load::<VehicleConfig>(Path::new("/nonexistent/drivesim/vehicle.yaml"));
        assert!(matches!(result, Err(CliError::ConfigRead { .. })));
    }
}
