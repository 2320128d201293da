use std::fmt;

use serde::{Deserialize, Serialize};

/// 이 값을 초과하면 고낙차(Pelton).
pub const HIGH_HEAD_THRESHOLD_M: f64 = 300.0;
/// 이 값 이상 ~ [`HIGH_HEAD_THRESHOLD_M`] 이하는 중낙차(Francis).
pub const MEDIUM_HEAD_THRESHOLD_M: f64 = 50.0;

/// 낙차 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadClass {
    High,
    Medium,
    Low,
}

/// 추천 수차 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurbineType {
    Pelton,
    Francis,
    #[serde(rename = "Kaplan/Propeller")]
    KaplanPropeller,
}

impl TurbineType {
    pub fn head_class(self) -> HeadClass {
        match self {
            TurbineType::Pelton => HeadClass::High,
            TurbineType::Francis => HeadClass::Medium,
            TurbineType::KaplanPropeller => HeadClass::Low,
        }
    }

    /// 기본(영문) 추천 문구.
    pub fn label(self) -> &'static str {
        match self {
            TurbineType::Pelton => "Pelton Turbine (High Head)",
            TurbineType::Francis => "Francis Turbine (Medium Head)",
            TurbineType::KaplanPropeller => "Kaplan / Propeller Turbine (Low Head)",
        }
    }

    /// 언어팩 키.
    pub fn i18n_key(self) -> &'static str {
        match self {
            TurbineType::Pelton => "turbine.pelton",
            TurbineType::Francis => "turbine.francis",
            TurbineType::KaplanPropeller => "turbine.kaplan",
        }
    }
}

impl fmt::Display for TurbineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 유효 낙차로 수차 형식을 고른다.
///
/// - H > 300 → Pelton
/// - 50 ≤ H ≤ 300 → Francis
/// - 그 외(음수, NaN 포함) → Kaplan/Propeller
pub fn classify_turbine(head_m: f64) -> TurbineType {
    if head_m > HIGH_HEAD_THRESHOLD_M {
        TurbineType::Pelton
    } else if (MEDIUM_HEAD_THRESHOLD_M..=HIGH_HEAD_THRESHOLD_M).contains(&head_m) {
        TurbineType::Francis
    } else {
        TurbineType::KaplanPropeller
    }
}
