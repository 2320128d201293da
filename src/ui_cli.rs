use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::hydro::{self, PlantInputs};
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Plant,
    UnitConversion,
    Notes,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_PLANT,
        keys::MAIN_MENU_UNIT_CONVERSION,
        keys::MAIN_MENU_NOTES,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Plant),
            "2" => return Ok(MenuChoice::UnitConversion),
            "3" => return Ok(MenuChoice::Notes),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 발전소 설계값 계산 메뉴를 처리한다. 빈 입력은 설정의 기본값을 쓴다.
pub fn handle_plant(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PLANT_HEADING));
    let d = cfg.defaults;
    let inputs = PlantInputs {
        discharge_cusec: read_f64_or(tr, keys::PROMPT_DISCHARGE, d.discharge_cusec)?,
        velocity_fps: read_f64_or(tr, keys::PROMPT_VELOCITY, d.velocity_fps)?,
        head_m: read_f64_or(tr, keys::PROMPT_HEAD, d.head_m)?,
        turbine_efficiency_pct: read_u8_or(tr, keys::PROMPT_TURBINE_EFF, d.turbine_efficiency_pct)?,
        generator_efficiency_pct: read_u8_or(
            tr,
            keys::PROMPT_GENERATOR_EFF,
            d.generator_efficiency_pct,
        )?,
    };
    match hydro::evaluate(&inputs, &cfg.fluid) {
        Ok(result) => println!("\n{}", report::render_text(&result, tr)),
        Err(err) => println!(
            "{}: {}: {err}",
            tr.t(keys::ERROR_PREFIX),
            tr.t(keys::ERROR_INVALID_INPUT)
        ),
    }
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    let options = QuantityKind::ALL
        .iter()
        .enumerate()
        .map(|(i, k)| format!("{}) {}", i + 1, tr.t(k.i18n_key())))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{options}");
    let kind = loop {
        let sel = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Some(kind) = map_quantity(sel.trim()) {
            break kind;
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    println!(
        "{}",
        tr.format(
            keys::UNIT_CONVERSION_AVAILABLE,
            &[("units", kind.unit_symbols().join(", "))]
        )
    );
    let value = read_f64(tr, &tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    match conversion::convert(kind, value, from_unit.trim(), to_unit.trim()) {
        Ok(result) => println!(
            "{} {result} {}",
            tr.t(keys::UNIT_CONVERSION_RESULT),
            to_unit.trim()
        ),
        Err(err) => println!("{}: {err}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

fn map_quantity(sel: &str) -> Option<QuantityKind> {
    let n = sel.parse::<usize>().ok()?;
    QuantityKind::ALL.get(n.checked_sub(1)?).copied()
}

/// 공식 및 참고 문구를 출력한다.
pub fn handle_notes(tr: &Translator) {
    println!("\n{}", report::render_notes(tr));
}

/// 설정 메뉴를 처리한다. 언어가 바뀌었으면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}",
        tr.format(keys::SETTINGS_CURRENT_LANGUAGE, &[("lang", cfg.language.clone())])
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let lang = match sel.trim() {
        "" => return Ok(false),
        "1" => "auto",
        "2" => "en-us",
        "3" => "ko-kr",
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(false);
        }
    };
    cfg.language = lang.to_string();
    Ok(true)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().lock().read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_f64_or(tr: &Translator, key: &str, default: f64) -> Result<f64, AppError> {
    let prompt = tr.format(key, &[("default", default.to_string())]);
    loop {
        let s = read_line(&prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u8_or(tr: &Translator, key: &str, default: u8) -> Result<u8, AppError> {
    let prompt = tr.format(key, &[("default", default.to_string())]);
    loop {
        let s = read_line(&prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<u8>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
