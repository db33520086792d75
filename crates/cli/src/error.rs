//! Error types for drivesim CLI

use drivesim_core::SimError;
use drivesim_motor::MotorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Cannot read {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse {path}: {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Unsupported config format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Process exit code for an invalid simulation parameter or sweep.
pub const EXIT_INVALID_PARAMETER: u8 = 2;
/// Process exit code for vehicle or config file problems.
pub const EXIT_CONFIG: u8 = 3;
/// Process exit code for anything else.
pub const EXIT_FAILURE: u8 = 1;

/// Maps an error chain to the process exit code.
pub fn exit_code(error: &anyhow::Error) -> u8 {
    for cause in error.chain() {
        if let Some(e) = cause.downcast_ref::<SimError>() {
            return match e {
                SimError::InvalidParameter { .. } | SimError::InvalidSweep(_) => {
                    EXIT_INVALID_PARAMETER
                }
                SimError::InvalidVehicle(_) | SimError::Motor(_) => EXIT_CONFIG,
            };
        }
        if let Some(e) = cause.downcast_ref::<CliError>() {
            return match e {
                CliError::InvalidArgument(_) => EXIT_INVALID_PARAMETER,
                CliError::ConfigRead { .. }
                | CliError::ConfigParse { .. }
                | CliError::UnsupportedFormat(_) => EXIT_CONFIG,
            };
        }
        if cause.downcast_ref::<MotorError>().is_some() {
            return EXIT_INVALID_PARAMETER;
        }
    }
    EXIT_FAILURE
}

/// Short machine-readable name for the error kind.
pub fn error_kind(error: &anyhow::Error) -> &'static str {
    for cause in error.chain() {
        if let Some(e) = cause.downcast_ref::<SimError>() {
            return match e {
                SimError::InvalidParameter { .. } => "invalid_parameter",
                SimError::InvalidSweep(_) => "invalid_sweep",
                SimError::InvalidVehicle(_) => "invalid_vehicle",
                SimError::Motor(_) => "motor",
            };
        }
        if let Some(e) = cause.downcast_ref::<CliError>() {
            return match e {
                CliError::InvalidArgument(_) => "invalid_argument",
                _ => "config",
            };
        }
        if cause.downcast_ref::<MotorError>().is_some() {
            return "motor";
        }
    }
    "internal"
}
