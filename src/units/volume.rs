use serde::{Deserialize, Serialize};

use super::CUBIC_METER_PER_CUBIC_FOOT;

/// 체적 단위. 내부 기준은 입방미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMeter,
    Liter,
    CubicFoot,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 3] = [
        VolumeUnit::CubicMeter,
        VolumeUnit::Liter,
        VolumeUnit::CubicFoot,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::CubicMeter => "m3",
            VolumeUnit::Liter => "L",
            VolumeUnit::CubicFoot => "ft3",
        }
    }
}

fn to_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value,
        VolumeUnit::Liter => value / 1000.0,
        VolumeUnit::CubicFoot => value * CUBIC_METER_PER_CUBIC_FOOT,
    }
}

fn from_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value,
        VolumeUnit::Liter => value * 1000.0,
        VolumeUnit::CubicFoot => value / CUBIC_METER_PER_CUBIC_FOOT,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    if from == to {
        return value;
    }
    from_cubic_meter(to_cubic_meter(value, from), to)
}
