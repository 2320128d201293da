use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::penstock::penstock_diameter;
use super::power::{electrical_power, hydraulic_power, FluidConstants};
use super::turbine::{classify_turbine, TurbineType};
use crate::conversion::{discharge_cusec_to_m3s, velocity_fps_to_mps};

/// 유량 하한 [cusec]
pub const MIN_DISCHARGE_CUSEC: f64 = 0.0;
/// 설계 유속 하한 [ft/s]. 입력 단계에서 0 이하 유속을 막는다.
pub const MIN_VELOCITY_FPS: f64 = 0.1;
/// 유효 낙차 하한 [m]
pub const MIN_HEAD_M: f64 = 0.0;
/// 효율 입력 범위 [%]
pub const EFFICIENCY_PCT_RANGE: RangeInclusive<u8> = 1..=100;

/// 입력 검증 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite number (got {value})")]
    NonFinite { field: &'static str, value: f64 },
    #[error("discharge must be at least {min} cusec (got {value})")]
    DischargeBelowMinimum { value: f64, min: f64 },
    #[error("velocity must be at least {min} ft/s (got {value})")]
    VelocityBelowMinimum { value: f64, min: f64 },
    #[error("net head must be at least {min} m (got {value})")]
    HeadBelowMinimum { value: f64, min: f64 },
    #[error("{field} efficiency must be within 1-100 % (got {value} %)")]
    EfficiencyOutOfRange { field: &'static str, value: u8 },
}

/// 효율 분율. 0.01 ≤ 값 ≤ 1.00 이 보장된다.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Efficiency(f64);

impl Efficiency {
    pub const MIN: f64 = 0.01;
    pub const MAX: f64 = 1.0;

    /// 분율(0.01~1.0)로 생성한다. 범위를 벗어나면 `None`.
    pub fn new(fraction: f64) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&fraction)
            .then_some(Self(fraction))
    }

    /// 정수 퍼센트(1~100)를 받아 100으로 나눈 분율로 만든다.
    pub fn from_percent(pct: u8) -> Option<Self> {
        if !EFFICIENCY_PCT_RANGE.contains(&pct) {
            return None;
        }
        Self::new(f64::from(pct) / 100.0)
    }

    pub fn fraction(self) -> f64 {
        self.0
    }
}

/// 폼에서 수집하는 원시 입력값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantInputs {
    /// 유량 Q [cusec]
    pub discharge_cusec: f64,
    /// 수압관 설계 유속 v [ft/s]
    pub velocity_fps: f64,
    /// 유효 낙차 H [m]
    pub head_m: f64,
    /// 수차 효율 ηt [%]
    pub turbine_efficiency_pct: u8,
    /// 발전기 효율 ηg [%]
    pub generator_efficiency_pct: u8,
}

impl Default for PlantInputs {
    fn default() -> Self {
        Self {
            discharge_cusec: 100.0,
            velocity_fps: 6.0,
            head_m: 20.0,
            turbine_efficiency_pct: 85,
            generator_efficiency_pct: 90,
        }
    }
}

/// 검증을 통과한 입력. 효율은 분율로 바뀌어 있다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInputs {
    pub discharge_cusec: f64,
    pub velocity_fps: f64,
    pub head_m: f64,
    pub eta_turbine: Efficiency,
    pub eta_generator: Efficiency,
}

impl PlantInputs {
    /// 입력 하한과 효율 범위를 확인한다.
    ///
    /// 음의 낙차는 여기서 거부한다. [`classify_turbine`] 자체는 모든 실수에 대해
    /// 정의되어 있으므로 검증 없이 호출하면 저낙차로 분류된다.
    pub fn validate(&self) -> Result<ValidatedInputs, InputError> {
        for (field, value) in [
            ("discharge", self.discharge_cusec),
            ("velocity", self.velocity_fps),
            ("head", self.head_m),
        ] {
            if !value.is_finite() {
                return Err(InputError::NonFinite { field, value });
            }
        }
        if self.discharge_cusec < MIN_DISCHARGE_CUSEC {
            return Err(InputError::DischargeBelowMinimum {
                value: self.discharge_cusec,
                min: MIN_DISCHARGE_CUSEC,
            });
        }
        if self.velocity_fps < MIN_VELOCITY_FPS {
            return Err(InputError::VelocityBelowMinimum {
                value: self.velocity_fps,
                min: MIN_VELOCITY_FPS,
            });
        }
        if self.head_m < MIN_HEAD_M {
            return Err(InputError::HeadBelowMinimum {
                value: self.head_m,
                min: MIN_HEAD_M,
            });
        }
        let eta_turbine = Efficiency::from_percent(self.turbine_efficiency_pct).ok_or(
            InputError::EfficiencyOutOfRange {
                field: "turbine",
                value: self.turbine_efficiency_pct,
            },
        )?;
        let eta_generator = Efficiency::from_percent(self.generator_efficiency_pct).ok_or(
            InputError::EfficiencyOutOfRange {
                field: "generator",
                value: self.generator_efficiency_pct,
            },
        )?;
        Ok(ValidatedInputs {
            discharge_cusec: self.discharge_cusec,
            velocity_fps: self.velocity_fps,
            head_m: self.head_m,
            eta_turbine,
            eta_generator,
        })
    }
}

/// 한 번의 계산 결과. SI 환산값과 모든 출력값을 담는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlantResult {
    /// 유량 [m³/s]
    pub discharge_m3_per_s: f64,
    /// 유속 [m/s]
    pub velocity_m_per_s: f64,
    /// 유효 낙차 [m]
    pub head_m: f64,
    /// 이론 수력 출력 [W]
    pub hydraulic_power_w: f64,
    /// 발전 출력 [W]
    pub electrical_power_w: f64,
    /// 수압관 내경 [m]. 유속이 0 이하이면 없음.
    pub penstock_diameter_m: Option<f64>,
    /// 추천 수차
    pub turbine: TurbineType,
}

impl PlantResult {
    pub fn hydraulic_power_kw(&self) -> f64 {
        self.hydraulic_power_w / 1e3
    }

    pub fn electrical_power_kw(&self) -> f64 {
        self.electrical_power_w / 1e3
    }

    pub fn electrical_power_mw(&self) -> f64 {
        self.electrical_power_w / 1e6
    }
}

/// 검증된 입력으로 단위 환산 → 출력 → 관경 → 수차 분류를 순서대로 수행한다.
pub fn compute(inputs: &ValidatedInputs, fluid: &FluidConstants) -> PlantResult {
    let discharge_m3_per_s = discharge_cusec_to_m3s(inputs.discharge_cusec);
    let velocity_m_per_s = velocity_fps_to_mps(inputs.velocity_fps);

    let hydraulic_power_w = hydraulic_power(
        fluid.density_kg_per_m3,
        fluid.gravity_m_per_s2,
        discharge_m3_per_s,
        inputs.head_m,
    );
    let electrical_power_w = electrical_power(
        hydraulic_power_w,
        inputs.eta_turbine.fraction(),
        inputs.eta_generator.fraction(),
    );
    let penstock_diameter_m = penstock_diameter(discharge_m3_per_s, velocity_m_per_s);
    if penstock_diameter_m.is_none() {
        warn!(velocity_m_per_s, "penstock diameter undefined for non-positive velocity");
    }

    PlantResult {
        discharge_m3_per_s,
        velocity_m_per_s,
        head_m: inputs.head_m,
        hydraulic_power_w,
        electrical_power_w,
        penstock_diameter_m,
        turbine: classify_turbine(inputs.head_m),
    }
}

/// 원시 입력을 검증한 뒤 계산한다.
pub fn evaluate(inputs: &PlantInputs, fluid: &FluidConstants) -> Result<PlantResult, InputError> {
    let validated = inputs.validate().map_err(|err| {
        warn!(%err, "plant inputs rejected");
        err
    })?;
    let result = compute(&validated, fluid);
    debug!(
        q_m3s = result.discharge_m3_per_s,
        v_mps = result.velocity_m_per_s,
        p_hyd_w = result.hydraulic_power_w,
        p_out_w = result.electrical_power_w,
        turbine = ?result.turbine,
        "plant evaluated"
    );
    Ok(result)
}
