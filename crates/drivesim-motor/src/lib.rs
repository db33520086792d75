//! Linear DC motor model for DriveSim
//!
//! This crate encodes the steady-state relationship between shaft speed,
//! applied voltage, current and torque of a permanent-magnet DC motor, and
//! lets callers derive the equivalent motor seen through a lossless gear
//! reduction.
//!
//! # Overview
//!
//! - [`MotorSpec`]: immutable motor value with derived resistance, torque
//!   constant and speed constant
//! - [`MotorPreset`]: manufacturer-characterized motors
//! - [`units`]: unit conversions used by the model and by front ends
//!
//! # Example
//!
//! ```
//! use drivesim_motor::MotorSpec;
//!
//! let motor = MotorSpec::neo_vortex(1)?;
//! let geared = motor.with_reduction(5.0)?;
//!
//! // Gearing multiplies torque and divides speed
//! assert!((geared.stall_torque() - motor.stall_torque() * 5.0).abs() < 1e-9);
//! assert!((geared.free_speed() - motor.free_speed() / 5.0).abs() < 1e-9);
//!
//! // Locked rotor at nominal voltage draws the stall current
//! let stall = geared.current(0.0, 12.0);
//! assert!((stall - 211.0).abs() < 1e-9);
//! # Ok::<(), drivesim_motor::MotorError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod motor;
pub mod presets;
pub mod units;

pub use error::{MotorError, MotorResult};
pub use motor::MotorSpec;
pub use presets::MotorPreset;
