//! 계산 결과를 텍스트/TOML로 출력한다.

use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::hydro::{FluidConstants, HeadClass, PlantInputs, PlantResult};
use crate::i18n::{keys, Translator};

/// 보고서 저장 오류.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("report serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 표시 형식이 고정된 결과 문자열 묶음.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedResult {
    /// kW, 소수 3자리
    pub hydraulic_kw: String,
    /// kW, 소수 3자리
    pub electrical_kw: String,
    /// MW, 소수 6자리
    pub electrical_mw: String,
    /// (관경 m 소수 3자리, 유속 m/s 소수 2자리). 유속이 0 이하이면 None.
    pub penstock: Option<(String, String)>,
}

impl FormattedResult {
    pub fn new(result: &PlantResult) -> Self {
        Self {
            hydraulic_kw: format!("{:.3}", result.hydraulic_power_kw()),
            electrical_kw: format!("{:.3}", result.electrical_power_kw()),
            electrical_mw: format!("{:.6}", result.electrical_power_mw()),
            penstock: result.penstock_diameter_m.map(|d| {
                (format!("{d:.3}"), format!("{:.2}", result.velocity_m_per_s))
            }),
        }
    }
}

/// 수압관 관경 문구. 유속이 0 이하라 관경이 없으면 `None`.
pub fn penstock_line(result: &PlantResult, tr: &Translator) -> Option<String> {
    FormattedResult::new(result).penstock.map(|(diameter, velocity)| {
        tr.format(
            keys::RESULT_PENSTOCK_OK,
            &[("diameter", diameter), ("velocity", velocity)],
        )
    })
}

/// 결과 블록 전체를 사람이 읽는 텍스트로 만든다.
pub fn render_text(result: &PlantResult, tr: &Translator) -> String {
    let f = FormattedResult::new(result);
    let mut lines = vec![
        format!("== {} ==", tr.t(keys::RESULT_HEADING)),
        tr.format(keys::RESULT_HYDRAULIC_POWER, &[("value", f.hydraulic_kw)]),
        format!("  {}", tr.t(keys::RESULT_HYDRAULIC_CAPTION)),
        tr.format(keys::RESULT_ELECTRICAL_POWER, &[("value", f.electrical_kw)]),
        format!("  {}", tr.t(keys::RESULT_ELECTRICAL_CAPTION)),
        tr.format(keys::RESULT_ELECTRICAL_MW, &[("value", f.electrical_mw)]),
        String::new(),
        format!("-- {} --", tr.t(keys::RESULT_PENSTOCK_HEADING)),
    ];
    lines.push(penstock_line(result, tr).unwrap_or_else(|| {
        format!(
            "{}: {}",
            tr.t(keys::ERROR_PREFIX),
            tr.t(keys::RESULT_PENSTOCK_INVALID)
        )
    }));
    lines.push(String::new());
    lines.push(format!("-- {} --", tr.t(keys::RESULT_TURBINE_HEADING)));
    lines.push(tr.t(result.turbine.i18n_key()));
    lines.join("\n")
}

/// 공식/환산/수차 선정 기준 참고 문구. 계산값은 포함하지 않는다.
pub fn render_notes(tr: &Translator) -> String {
    [
        format!("== {} ==", tr.t(keys::NOTES_HEADING)),
        tr.t(keys::NOTES_EQUATIONS),
        String::new(),
        tr.t(keys::NOTES_CONVERSIONS),
        String::new(),
        tr.t(keys::NOTES_TURBINES),
    ]
    .join("\n")
}

/// 보고서 내 결과 섹션.
#[derive(Debug, Clone, Serialize)]
pub struct ReportOutputs {
    pub discharge_m3_per_s: f64,
    pub velocity_m_per_s: f64,
    pub hydraulic_power_kw: f64,
    pub electrical_power_kw: f64,
    pub electrical_power_mw: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penstock_diameter_m: Option<f64>,
    pub turbine: String,
    pub head_class: HeadClass,
}

/// 내보내기용 스냅샷. 입력, 유체 상수, 결과를 함께 담는다.
#[derive(Debug, Clone, Serialize)]
pub struct PlantReport {
    pub generator: String,
    pub inputs: PlantInputs,
    pub fluid: FluidConstants,
    pub outputs: ReportOutputs,
}

impl PlantReport {
    pub fn new(inputs: &PlantInputs, fluid: &FluidConstants, result: &PlantResult) -> Self {
        Self {
            generator: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            inputs: *inputs,
            fluid: *fluid,
            outputs: ReportOutputs {
                discharge_m3_per_s: result.discharge_m3_per_s,
                velocity_m_per_s: result.velocity_m_per_s,
                hydraulic_power_kw: result.hydraulic_power_kw(),
                electrical_power_kw: result.electrical_power_kw(),
                electrical_power_mw: result.electrical_power_mw(),
                penstock_diameter_m: result.penstock_diameter_m,
                turbine: result.turbine.label().to_string(),
                head_class: result.turbine.head_class(),
            },
        }
    }

    pub fn to_toml(&self) -> Result<String, ReportError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 보고서를 TOML 파일로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        fs::write(path, self.to_toml()?)?;
        info!(path = %path.display(), "report saved");
        Ok(())
    }
}
