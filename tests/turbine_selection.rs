//! 낙차별 수차 분류 경계값 테스트.
use hydro_power_toolbox::hydro::{classify_turbine, HeadClass, TurbineType};

#[test]
fn boundary_values() {
    assert_eq!(classify_turbine(300.0), TurbineType::Francis);
    assert_eq!(classify_turbine(300.0001), TurbineType::Pelton);
    assert_eq!(classify_turbine(50.0), TurbineType::Francis);
    assert_eq!(classify_turbine(49.999), TurbineType::KaplanPropeller);
}

#[test]
fn typical_heads() {
    assert_eq!(classify_turbine(20.0), TurbineType::KaplanPropeller);
    assert_eq!(classify_turbine(120.0), TurbineType::Francis);
    assert_eq!(classify_turbine(800.0), TurbineType::Pelton);
    assert_eq!(classify_turbine(0.0), TurbineType::KaplanPropeller);
}

#[test]
fn negative_head_falls_into_low_head_branch() {
    assert_eq!(classify_turbine(-10.0), TurbineType::KaplanPropeller);
    assert_eq!(classify_turbine(f64::NEG_INFINITY), TurbineType::KaplanPropeller);
}

#[test]
fn labels_and_head_classes() {
    assert_eq!(TurbineType::Pelton.head_class(), HeadClass::High);
    assert_eq!(TurbineType::Francis.head_class(), HeadClass::Medium);
    assert_eq!(TurbineType::KaplanPropeller.head_class(), HeadClass::Low);
    assert_eq!(TurbineType::Francis.to_string(), "Francis Turbine (Medium Head)");
    assert_eq!(
        TurbineType::KaplanPropeller.label(),
        "Kaplan / Propeller Turbine (Low Head)"
    );
}
