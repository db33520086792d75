//! Drivetrain acceleration solver for DriveSim
//!
//! Given a wheel radius, gear reduction, commanded top speed and current
//! limit, this crate computes the peak acceleration a wheeled vehicle can
//! produce from a standstill and reports which constraint caps it: wheel
//! traction, back-EMF-reduced motor torque, or the current limit.
//!
//! The model is a single-instant force balance at `t = 0`, not a
//! time-stepped simulation. Every call is a pure function of its inputs.
//!
//! # Overview
//!
//! - [`SimulationParams`]: per-evaluation input
//! - [`VehicleConfig`]: mass, module count, friction, supply voltage, motor
//! - [`AccelerationSolver`]: closed-form solve producing a [`SimulationResult`]
//! - [`sweep`]: evaluate one parameter over a range
//!
//! # Example
//!
//! ```
//! use drivesim_core::{calculate_max_accel, LimitingFactor, SimulationParams};
//!
//! let result = calculate_max_accel(&SimulationParams::default())?;
//! assert!(result.max_accel > 0.0);
//! assert_ne!(result.limiting_factor, LimitingFactor::None);
//!
//! // Invalid input yields no result at all
//! let bad = SimulationParams::default().with_wheel_radius(0.0);
//! assert!(calculate_max_accel(&bad).is_err());
//! # Ok::<(), drivesim_core::SimError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod params;
pub mod prelude;
pub mod result;
pub mod solver;
pub mod sweep;
pub mod vehicle;

pub use error::{SimError, SimResult};
pub use params::SimulationParams;
pub use result::{LimitingFactor, SimulationResult};
pub use solver::{AccelerationSolver, calculate_max_accel};
pub use sweep::{SweepAxis, SweepPoint, peak_acceleration, sweep};
pub use vehicle::{STANDARD_GRAVITY, VehicleConfig};

pub use drivesim_motor::{MotorPreset, MotorSpec};
