//! 계산식의 전역 성질을 무작위 입력으로 확인한다.
use hydro_power_toolbox::conversion::{discharge_cusec_to_m3s, velocity_fps_to_mps};
use hydro_power_toolbox::hydro::{
    classify_turbine, electrical_power, hydraulic_power, penstock_diameter, TurbineType,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn discharge_conversion_is_linear(cusec in 0.0f64..1e7) {
        prop_assert_eq!(discharge_cusec_to_m3s(cusec), cusec * 0.0283168);
    }

    #[test]
    fn velocity_conversion_is_linear(fps in -1e6f64..1e6) {
        prop_assert_eq!(velocity_fps_to_mps(fps), fps * 0.3048);
    }

    #[test]
    fn hydraulic_power_is_non_negative(q in 0.0f64..1e4, h in 0.0f64..2e3) {
        let p = hydraulic_power(1000.0, 9.81, q, h);
        prop_assert!(p >= 0.0);
        prop_assert_eq!(p == 0.0, q == 0.0 || h == 0.0);
    }

    #[test]
    fn electrical_never_exceeds_hydraulic(
        p in 0.0f64..1e9,
        eta_t in 0.01f64..=1.0,
        eta_g in 0.01f64..=1.0,
    ) {
        prop_assert!(electrical_power(p, eta_t, eta_g) <= p);
    }

    #[test]
    fn diameter_absent_for_non_positive_velocity(q in 0.0f64..1e4, v in -1e3f64..=0.0) {
        prop_assert_eq!(penstock_diameter(q, v), None);
    }

    #[test]
    fn diameter_positive_for_positive_flow_and_velocity(q in 1e-6f64..1e4, v in 1e-3f64..1e2) {
        let d = penstock_diameter(q, v);
        prop_assert!(matches!(d, Some(d) if d > 0.0 && d.is_finite()));
    }

    #[test]
    fn classification_matches_head_bands(h in -1e3f64..1e4) {
        let expected = if h > 300.0 {
            TurbineType::Pelton
        } else if h >= 50.0 {
            TurbineType::Francis
        } else {
            TurbineType::KaplanPropeller
        };
        prop_assert_eq!(classify_turbine(h), expected);
    }
}
