//! 문자열 단위 기반 변환기 테스트.
use hydro_power_toolbox::conversion::{convert, ConversionError};
use hydro_power_toolbox::quantity::QuantityKind;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= rel_tol * denom,
        "{label} expected {expected} got {actual}"
    );
}

#[test]
fn cusec_to_cubic_meter_per_second() {
    let v = convert(QuantityKind::VolumetricFlow, 100.0, "cusec", "m3/s").expect("flow");
    assert_close("cusec", v, 2.83168, 1e-12);
    let lps = convert(QuantityKind::VolumetricFlow, 1.0, "m3/s", "L/s").expect("flow");
    assert_close("L/s", lps, 1000.0, 1e-12);
}

#[test]
fn feet_per_second_to_meter_per_second() {
    let v = convert(QuantityKind::Velocity, 6.0, "ft/s", "m/s").expect("velocity");
    assert_close("fps", v, 1.8288, 1e-12);
    let kmh = convert(QuantityKind::Velocity, 1.0, "m/s", "km/h").expect("velocity");
    assert_close("km/h", kmh, 3.6, 1e-12);
}

#[test]
fn power_and_length_units() {
    let mw = convert(QuantityKind::Power, 425_015.346, "W", "MW").expect("power");
    assert_close("MW", mw, 0.425_015_346, 1e-12);
    let hp = convert(QuantityKind::Power, 1.0, "hp", "kW").expect("power");
    assert_close("hp", hp, 0.745_699_87, 1e-8);
    let inch = convert(QuantityKind::Length, 1.404, "m", "in").expect("length");
    assert_close("in", inch, 55.275_590_55, 1e-9);
    let ft3 = convert(QuantityKind::Volume, 1.0, "ft3", "L").expect("volume");
    assert_close("ft3", ft3, 28.3168, 1e-9);
}

#[test]
fn unit_strings_are_case_insensitive() {
    let a = convert(QuantityKind::VolumetricFlow, 3.0, "CFS", "M3/S").expect("flow");
    let b = convert(QuantityKind::VolumetricFlow, 3.0, "cusec", "m3/s").expect("flow");
    assert_eq!(a, b);
}

#[test]
fn unknown_unit_is_reported() {
    let err = convert(QuantityKind::Velocity, 1.0, "furlong/fortnight", "m/s").unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnknownUnit("furlong/fortnight".to_string())
    );
}

#[test]
fn quantity_kind_parses_from_cli_names() {
    assert_eq!("flow".parse::<QuantityKind>(), Ok(QuantityKind::VolumetricFlow));
    assert_eq!("Velocity".parse::<QuantityKind>(), Ok(QuantityKind::Velocity));
    assert!("pressure".parse::<QuantityKind>().is_err());
}

#[test]
fn every_listed_unit_symbol_is_accepted() {
    for kind in QuantityKind::ALL {
        let units = kind.unit_symbols();
        for from in &units {
            for to in &units {
                assert!(
                    convert(kind, 1.0, from, to).is_ok(),
                    "{kind:?}: {from} -> {to}"
                );
            }
        }
    }
}
