//! 수력 출력/관경 계산 회귀 테스트.
use hydro_power_toolbox::conversion::{discharge_cusec_to_m3s, velocity_fps_to_mps};
use hydro_power_toolbox::hydro::{
    electrical_power, evaluate, hydraulic_power, penstock_diameter, FluidConstants, InputError,
    PlantInputs, TurbineType,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn discharge_and_velocity_conversions() {
    assert_eq!(discharge_cusec_to_m3s(100.0), 100.0 * 0.0283168);
    assert_eq!(discharge_cusec_to_m3s(0.0), 0.0);
    assert_eq!(velocity_fps_to_mps(6.0), 6.0 * 0.3048);
    // 음수, 0 유속도 그대로 환산된다.
    assert_eq!(velocity_fps_to_mps(0.0), 0.0);
    assert_eq!(velocity_fps_to_mps(-1.0), -0.3048);
}

#[test]
fn hydraulic_power_uses_rho_g_q_h() {
    let p = hydraulic_power(1000.0, 9.81, 2.0, 10.0);
    assert_close("P", p, 196_200.0, 1e-12);
    assert_eq!(hydraulic_power(1000.0, 9.81, 0.0, 10.0), 0.0);
    assert_eq!(hydraulic_power(1000.0, 9.81, 2.0, 0.0), 0.0);
}

#[test]
fn electrical_power_applies_both_efficiencies() {
    let p = electrical_power(100_000.0, 0.85, 0.90);
    assert_close("P_out", p, 76_500.0, 1e-12);
    assert_eq!(electrical_power(100_000.0, 1.0, 1.0), 100_000.0);
}

#[test]
fn penstock_diameter_from_continuity() {
    // Q = π/4 m³/s, v = 1 m/s → D = 1 m
    let d = penstock_diameter(std::f64::consts::FRAC_PI_4, 1.0).expect("positive velocity");
    assert_close("D", d, 1.0, 1e-12);
    assert_eq!(penstock_diameter(0.0, 2.0), Some(0.0));
}

#[test]
fn penstock_diameter_absent_for_non_positive_velocity() {
    assert_eq!(penstock_diameter(2.83168, 0.0), None);
    assert_eq!(penstock_diameter(2.83168, -1.0), None);
}

#[test]
fn default_plant_scenario() {
    let res = evaluate(&PlantInputs::default(), &FluidConstants::WATER).expect("valid defaults");
    assert_close("Q", res.discharge_m3_per_s, 2.83168, 1e-12);
    assert_close("v", res.velocity_m_per_s, 1.8288, 1e-12);
    assert_close("P_hyd", res.hydraulic_power_w, 555_575.616, 1e-9);
    assert_close("P_out", res.electrical_power_w, 425_015.346_24, 1e-9);
    assert_close("P_out MW", res.electrical_power_mw(), 0.425_015, 1e-6);
    let d = res.penstock_diameter_m.expect("diameter");
    assert_close("D", d, 1.404_087, 1e-6);
    assert_eq!(res.turbine, TurbineType::KaplanPropeller);
    assert!(res.electrical_power_w <= res.hydraulic_power_w);
}

#[test]
fn high_head_is_pelton_regardless_of_other_inputs() {
    for (q, v, t, g) in [(100.0, 6.0, 85, 90), (0.0, 0.1, 1, 1), (5_000.0, 40.0, 100, 100)] {
        let inputs = PlantInputs {
            discharge_cusec: q,
            velocity_fps: v,
            head_m: 350.0,
            turbine_efficiency_pct: t,
            generator_efficiency_pct: g,
        };
        let res = evaluate(&inputs, &FluidConstants::WATER).expect("valid inputs");
        assert_eq!(res.turbine, TurbineType::Pelton);
    }
}

#[test]
fn zero_velocity_is_rejected_at_input_floor() {
    let inputs = PlantInputs {
        velocity_fps: 0.0,
        ..PlantInputs::default()
    };
    let err = evaluate(&inputs, &FluidConstants::WATER).unwrap_err();
    assert!(matches!(err, InputError::VelocityBelowMinimum { .. }), "{err}");

    // 하한값 자체는 허용된다.
    let at_floor = PlantInputs {
        velocity_fps: 0.1,
        ..PlantInputs::default()
    };
    let res = evaluate(&at_floor, &FluidConstants::WATER).expect("floor velocity");
    assert!(res.penstock_diameter_m.is_some());
}

#[test]
fn out_of_range_inputs_are_rejected() {
    let base = PlantInputs::default();
    let cases = [
        PlantInputs { discharge_cusec: -1.0, ..base },
        PlantInputs { head_m: -0.5, ..base },
        PlantInputs { turbine_efficiency_pct: 0, ..base },
        PlantInputs { generator_efficiency_pct: 101, ..base },
        PlantInputs { head_m: f64::NAN, ..base },
    ];
    for inputs in cases {
        assert!(
            evaluate(&inputs, &FluidConstants::WATER).is_err(),
            "expected rejection for {inputs:?}"
        );
    }
}

#[test]
fn custom_fluid_constants_scale_power() {
    let sea_water = FluidConstants {
        density_kg_per_m3: 1025.0,
        gravity_m_per_s2: 9.81,
    };
    let fresh = evaluate(&PlantInputs::default(), &FluidConstants::WATER).expect("fresh");
    let salt = evaluate(&PlantInputs::default(), &sea_water).expect("salt");
    assert_close(
        "ratio",
        salt.hydraulic_power_w / fresh.hydraulic_power_w,
        1.025,
        1e-12,
    );
}

#[test]
fn efficiency_fraction_bounds() {
    use hydro_power_toolbox::hydro::Efficiency;
    assert_eq!(Efficiency::from_percent(85).map(Efficiency::fraction), Some(0.85));
    assert_eq!(Efficiency::from_percent(1).map(Efficiency::fraction), Some(0.01));
    assert!(Efficiency::from_percent(0).is_none());
    assert!(Efficiency::from_percent(101).is_none());
    assert!(Efficiency::new(1.0).is_some());
    assert!(Efficiency::new(0.005).is_none());
    assert!(Efficiency::new(f64::NAN).is_none());
}
