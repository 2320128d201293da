//! 설정 파일 및 보고서 출력 테스트.
use hydro_power_toolbox::config::{self, Config};
use hydro_power_toolbox::hydro::{
    compute, evaluate, Efficiency, FluidConstants, PlantInputs, ValidatedInputs,
};
use hydro_power_toolbox::i18n::Translator;
use hydro_power_toolbox::report::{
    penstock_line, render_notes, render_text, FormattedResult, PlantReport,
};

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_create(&path).expect("create");
    assert!(path.exists());
    assert_eq!(cfg.defaults, PlantInputs::default());
    assert_eq!(cfg.fluid, FluidConstants::WATER);
    assert_eq!(cfg.language, "auto");
}

#[test]
fn saved_config_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let mut cfg = config::load_or_create(&path).expect("create");
    cfg.language = "ko-kr".into();
    cfg.defaults.head_m = 120.0;
    cfg.save().expect("save");

    let reloaded = config::load_or_create(&path).expect("reload");
    assert_eq!(reloaded.language, "ko-kr");
    assert_eq!(reloaded.defaults.head_m, 120.0);
}

#[test]
fn invalid_values_in_config_fall_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
language = "en-us"

[fluid]
density_kg_per_m3 = -5.0

[defaults]
velocity_fps = 0.0
"#,
    )
    .expect("write");
    let cfg = config::load_or_create(&path).expect("load");
    assert_eq!(cfg.language, "en-us");
    assert_eq!(cfg.fluid, FluidConstants::WATER);
    assert_eq!(cfg.defaults, PlantInputs::default());
}

#[test]
fn partial_config_keeps_remaining_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[defaults]\nhead_m = 75.0\n").expect("write");
    let cfg = config::load_or_create(&path).expect("load");
    assert_eq!(cfg.defaults.head_m, 75.0);
    assert_eq!(cfg.defaults.discharge_cusec, 100.0);
    assert_eq!(cfg.window_alpha, Config::default().window_alpha);
}

#[test]
fn formatted_result_uses_fixed_decimals() {
    let res = evaluate(&PlantInputs::default(), &FluidConstants::WATER).expect("eval");
    let f = FormattedResult::new(&res);
    assert_eq!(f.hydraulic_kw, "555.576");
    assert_eq!(f.electrical_kw, "425.015");
    assert_eq!(f.electrical_mw, "0.425015");
    assert_eq!(f.penstock, Some(("1.404".to_string(), "1.83".to_string())));
}

#[test]
fn text_report_contains_all_outputs() {
    let tr = Translator::new("en-us");
    let res = evaluate(&PlantInputs::default(), &FluidConstants::WATER).expect("eval");
    let text = render_text(&res, &tr);
    assert!(text.contains("555.576 kW"), "{text}");
    assert!(text.contains("425.015 kW"), "{text}");
    assert!(text.contains("0.425015 MW"), "{text}");
    assert!(text.contains("Recommended Diameter ≈ 1.404 m (for velocity 1.83 m/s)"), "{text}");
    assert!(text.contains("Kaplan / Propeller Turbine (Low Head)"), "{text}");
}

#[test]
fn zero_velocity_shows_penstock_error_and_keeps_other_outputs() {
    let tr = Translator::new("en-us");
    let inputs = ValidatedInputs {
        discharge_cusec: 100.0,
        velocity_fps: 0.0,
        head_m: 20.0,
        eta_turbine: Efficiency::from_percent(85).expect("eta_t"),
        eta_generator: Efficiency::from_percent(90).expect("eta_g"),
    };
    let res = compute(&inputs, &FluidConstants::WATER);
    assert_eq!(res.penstock_diameter_m, None);
    assert_eq!(penstock_line(&res, &tr), None);

    let text = render_text(&res, &tr);
    assert!(text.contains("Error: Invalid velocity selected."), "{text}");
    assert!(text.contains("555.576 kW"), "{text}");
    assert!(text.contains("425.015 kW"), "{text}");
    assert!(text.contains("0.425015 MW"), "{text}");
    assert!(text.contains("Kaplan / Propeller Turbine (Low Head)"), "{text}");
    assert!(!text.contains("Recommended Diameter"), "{text}");
}

#[test]
fn korean_report_uses_korean_labels() {
    let tr = Translator::new("ko");
    let res = evaluate(
        &PlantInputs {
            head_m: 350.0,
            ..PlantInputs::default()
        },
        &FluidConstants::WATER,
    )
    .expect("eval");
    let text = render_text(&res, &tr);
    assert!(text.contains("펠톤 수차"), "{text}");
}

#[test]
fn notes_list_formulas_and_constants() {
    let notes = render_notes(&Translator::new("en"));
    assert!(notes.contains("P = ρ g Q H"));
    assert!(notes.contains("0.0283168"));
    assert!(notes.contains("0.3048"));
    assert!(notes.contains("> 300 m"));
}

#[test]
fn toml_report_includes_inputs_and_outputs() {
    let inputs = PlantInputs::default();
    let res = evaluate(&inputs, &FluidConstants::WATER).expect("eval");
    let toml_text = PlantReport::new(&inputs, &FluidConstants::WATER, &res)
        .to_toml()
        .expect("toml");
    let value: toml::Value = toml::from_str(&toml_text).expect("parse back");
    assert_eq!(value["inputs"]["turbine_efficiency_pct"].as_integer(), Some(85));
    assert_eq!(
        value["outputs"]["turbine"].as_str(),
        Some("Kaplan / Propeller Turbine (Low Head)")
    );
    assert!(value["outputs"]["penstock_diameter_m"].as_float().is_some());
    assert_eq!(value["outputs"]["head_class"].as_str(), Some("Low"));
}

#[test]
fn cli_language_does_not_replace_saved_auto() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_create(&path).expect("create");
    assert_eq!(cfg.resolved_language("ko"), "ko-kr");
    assert_eq!(cfg.resolved_language("en-us"), "en-us");
    assert_eq!(cfg.language, "auto");

    cfg.save().expect("save");
    let reloaded = config::load_or_create(&path).expect("reload");
    assert_eq!(reloaded.language, "auto");
}
