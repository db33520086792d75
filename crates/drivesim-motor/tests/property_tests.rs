//! Property-based tests for the linear motor model.

use drivesim_motor::{MotorError, MotorPreset, MotorSpec};
use proptest::prelude::*;

fn preset_strategy() -> impl Strategy<Value = MotorPreset> {
    prop::sample::select(MotorPreset::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // --- Current is linear and decreasing in speed ---

    #[test]
    fn current_decreases_with_speed(
        preset in preset_strategy(),
        speed_a in 0.0f64..2000.0,
        delta in 0.001f64..500.0,
        voltage in 1.0f64..24.0,
    ) {
        let motor = preset.spec(1)?;
        let slow = motor.current(speed_a, voltage);
        let fast = motor.current(speed_a + delta, voltage);
        prop_assert!(fast < slow, "current({}) = {} should be below current({}) = {}",
            speed_a + delta, fast, speed_a, slow);
    }

    // --- Torque is proportional to current, sign included ---

    #[test]
    fn torque_scales_with_current(preset in preset_strategy(), current in -500.0f64..500.0) {
        let motor = preset.spec(1)?;
        let torque = motor.torque(current);
        prop_assert!((torque - current * motor.torque_constant()).abs() < 1e-9);
        prop_assert_eq!(torque.signum(), current.signum() * motor.torque_constant().signum());
    }

    // --- Reduction: torque up, speed down, electrical figures unchanged ---

    #[test]
    fn reduction_preserves_electrical_figures(
        preset in preset_strategy(),
        count in 1u32..4,
        ratio in 0.1f64..100.0,
    ) {
        let motor = preset.spec(count)?;
        let geared = motor.with_reduction(ratio)?;

        prop_assert_eq!(geared.motor_count(), 1);
        prop_assert_eq!(geared.nominal_voltage().to_bits(), motor.nominal_voltage().to_bits());
        prop_assert_eq!(geared.stall_current().to_bits(), motor.stall_current().to_bits());
        prop_assert_eq!(geared.resistance().to_bits(), motor.resistance().to_bits());

        let torque_ratio = geared.stall_torque() / motor.stall_torque();
        let speed_ratio = motor.free_speed() / geared.free_speed();
        prop_assert!((torque_ratio - ratio).abs() < 1e-9 * ratio);
        prop_assert!((speed_ratio - ratio).abs() < 1e-9 * ratio);
    }

    // --- Reduction conserves stall current at every voltage ---

    #[test]
    fn reduction_keeps_stall_current(
        preset in preset_strategy(),
        ratio in 0.5f64..50.0,
        voltage in 0.0f64..24.0,
    ) {
        let motor = preset.spec(1)?;
        let geared = motor.with_reduction(ratio)?;
        let a = motor.current(0.0, voltage);
        let b = geared.current(0.0, voltage);
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    // --- Current at free speed equals free current after any reduction ---

    #[test]
    fn free_speed_draws_free_current(preset in preset_strategy(), ratio in 0.5f64..50.0) {
        let geared = preset.spec(1)?.with_reduction(ratio)?;
        let current = geared.current(geared.free_speed(), geared.nominal_voltage());
        prop_assert!((current - geared.free_current()).abs() < 1e-6,
            "expected {}, got {}", geared.free_current(), current);
    }

    // --- Non-positive ratios are rejected ---

    #[test]
    fn non_positive_ratio_rejected(preset in preset_strategy(), ratio in -100.0f64..=0.0) {
        let motor = preset.spec(1)?;
        prop_assert_eq!(motor.with_reduction(ratio), Err(MotorError::InvalidReduction(ratio)));
    }
}

#[test]
fn neo_vortex_factory_matches_preset() -> Result<(), MotorError> {
    assert_eq!(MotorSpec::neo_vortex(2)?, MotorPreset::NeoVortex.spec(2)?);
    Ok(())
}
