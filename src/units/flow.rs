use serde::{Deserialize, Serialize};

use super::CUBIC_METER_PER_CUBIC_FOOT;

/// 1 US gallon = 3.785411784 L
const CUBIC_METER_PER_US_GALLON: f64 = 0.003_785_411_784;

/// 체적 유량 단위. 내부 기준은 m³/s이다.
///
/// `Cusec`은 ft³/s와 같다(1 cusec = 1 cfs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    CubicMeterPerSecond,
    CubicMeterPerHour,
    LiterPerSecond,
    Cusec,
    UsGallonPerMinute,
}

impl FlowUnit {
    pub const ALL: [FlowUnit; 5] = [
        FlowUnit::CubicMeterPerSecond,
        FlowUnit::CubicMeterPerHour,
        FlowUnit::LiterPerSecond,
        FlowUnit::Cusec,
        FlowUnit::UsGallonPerMinute,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            FlowUnit::CubicMeterPerSecond => "m3/s",
            FlowUnit::CubicMeterPerHour => "m3/h",
            FlowUnit::LiterPerSecond => "L/s",
            FlowUnit::Cusec => "cusec",
            FlowUnit::UsGallonPerMinute => "gpm",
        }
    }
}

fn to_m3s(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::CubicMeterPerHour => value / 3600.0,
        FlowUnit::LiterPerSecond => value / 1000.0,
        FlowUnit::Cusec => value * CUBIC_METER_PER_CUBIC_FOOT,
        FlowUnit::UsGallonPerMinute => value * CUBIC_METER_PER_US_GALLON / 60.0,
    }
}

fn from_m3s(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::CubicMeterPerHour => value * 3600.0,
        FlowUnit::LiterPerSecond => value * 1000.0,
        FlowUnit::Cusec => value / CUBIC_METER_PER_CUBIC_FOOT,
        FlowUnit::UsGallonPerMinute => value * 60.0 / CUBIC_METER_PER_US_GALLON,
    }
}

/// 체적 유량을 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    if from == to {
        return value;
    }
    from_m3s(to_m3s(value, from), to)
}
