//! Prelude module for convenient imports.
//!
//! ```
//! use drivesim_core::prelude::*;
//!
//! fn launch(params: &SimulationParams) -> SimResult<f64> {
//!     Ok(calculate_max_accel(params)?.max_accel)
//! }
//!
//! assert!(launch(&SimulationParams::default()).is_ok());
//! ```

pub use crate::{
    error::{SimError, SimResult},
    params::SimulationParams,
    result::{LimitingFactor, SimulationResult},
    solver::{AccelerationSolver, calculate_max_accel},
    sweep::{SweepAxis, SweepPoint, peak_acceleration, sweep},
    vehicle::VehicleConfig,
};
pub use drivesim_motor::{MotorPreset, MotorSpec};
