//! Fixed vehicle constants.

use drivesim_motor::{MotorPreset, MotorResult, MotorSpec};
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Standard gravitational acceleration (m/s²).
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Default vehicle mass (kg).
pub const DEFAULT_MASS_KG: f64 = 22.0;

/// Default number of independently driven traction modules.
pub const DEFAULT_NUM_MODULES: u32 = 4;

/// Default wheel/ground coefficient of friction.
pub const DEFAULT_FRICTION_COEFFICIENT: f64 = 1.2;

/// Default supply voltage (V) used for every current evaluation.
pub const DEFAULT_SUPPLY_VOLTAGE: f64 = 12.0;

/// Default number of ganged motors per module.
pub const DEFAULT_MOTORS_PER_MODULE: u32 = 1;

/// Vehicle-level constants the solver holds fixed across evaluations.
///
/// Every field has a default, so config files only need to name the
/// values they override.
///
/// # Examples
///
/// ```
/// use drivesim_core::VehicleConfig;
///
/// let vehicle = VehicleConfig::default().with_mass_kg(50.0);
/// assert!(vehicle.validate().is_ok());
///
/// // Weight is shared evenly, so each module's grip is a quarter of the total
/// let per_module = vehicle.traction_limit();
/// assert!((per_module - 1.2 * 50.0 * 9.80665 / 4.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VehicleConfig {
    /// Total vehicle mass (kg).
    pub mass_kg: f64,
    /// Number of driven traction modules.
    pub num_modules: u32,
    /// Coefficient of friction between wheel and ground.
    pub friction_coefficient: f64,
    /// Supply voltage (V).
    pub supply_voltage: f64,
    /// Ganged motors driving each module.
    pub motors_per_module: u32,
    /// Motor driving each module.
    pub motor: MotorPreset,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            mass_kg: DEFAULT_MASS_KG,
            num_modules: DEFAULT_NUM_MODULES,
            friction_coefficient: DEFAULT_FRICTION_COEFFICIENT,
            supply_voltage: DEFAULT_SUPPLY_VOLTAGE,
            motors_per_module: DEFAULT_MOTORS_PER_MODULE,
            motor: MotorPreset::default(),
        }
    }
}

impl VehicleConfig {
    /// Sets the vehicle mass (kg).
    pub fn with_mass_kg(mut self, mass_kg: f64) -> Self {
        self.mass_kg = mass_kg;
        self
    }

    /// Sets the number of driven modules.
    pub fn with_num_modules(mut self, num_modules: u32) -> Self {
        self.num_modules = num_modules;
        self
    }

    /// Sets the coefficient of friction.
    pub fn with_friction_coefficient(mut self, friction_coefficient: f64) -> Self {
        self.friction_coefficient = friction_coefficient;
        self
    }

    /// Sets the supply voltage (V).
    pub fn with_supply_voltage(mut self, supply_voltage: f64) -> Self {
        self.supply_voltage = supply_voltage;
        self
    }

    /// Sets the motor preset and how many are ganged per module.
    pub fn with_motor(mut self, motor: MotorPreset, motors_per_module: u32) -> Self {
        self.motor = motor;
        self.motors_per_module = motors_per_module;
        self
    }

    /// Checks the constants.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidVehicle`] if the mass or supply voltage is
    /// not finite and positive, the friction coefficient is negative or not
    /// finite, or either count is zero.
    pub fn validate(&self) -> SimResult<()> {
        if !self.mass_kg.is_finite() || self.mass_kg <= 0.0 {
            return Err(SimError::InvalidVehicle(format!(
                "mass_kg must be finite and positive, got {}",
                self.mass_kg
            )));
        }
        if self.num_modules == 0 {
            return Err(SimError::InvalidVehicle(
                "num_modules must be at least 1".to_string(),
            ));
        }
        if !self.friction_coefficient.is_finite() || self.friction_coefficient < 0.0 {
            return Err(SimError::InvalidVehicle(format!(
                "friction_coefficient must be finite and non-negative, got {}",
                self.friction_coefficient
            )));
        }
        if !self.supply_voltage.is_finite() || self.supply_voltage <= 0.0 {
            return Err(SimError::InvalidVehicle(format!(
                "supply_voltage must be finite and positive, got {}",
                self.supply_voltage
            )));
        }
        if self.motors_per_module == 0 {
            return Err(SimError::InvalidVehicle(
                "motors_per_module must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Horizontal force (N) one module's contact patch sustains before
    /// slipping, assuming the weight is shared evenly.
    pub fn traction_limit(&self) -> f64 {
        (self.friction_coefficient * (self.mass_kg * STANDARD_GRAVITY))
            / f64::from(self.num_modules)
    }

    /// Ungeared motor set driving one module.
    ///
    /// # Errors
    ///
    /// Returns a motor error if `motors_per_module` is zero.
    pub fn base_motor(&self) -> MotorResult<MotorSpec> {
        self.motor.spec(self.motors_per_module)
    }
}
