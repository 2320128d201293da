use serde::{Deserialize, Serialize};

use super::METER_PER_FOOT;

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    FootPerSecond,
    KilometerPerHour,
}

impl VelocityUnit {
    pub const ALL: [VelocityUnit; 3] = [
        VelocityUnit::MeterPerSecond,
        VelocityUnit::FootPerSecond,
        VelocityUnit::KilometerPerHour,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            VelocityUnit::MeterPerSecond => "m/s",
            VelocityUnit::FootPerSecond => "ft/s",
            VelocityUnit::KilometerPerHour => "km/h",
        }
    }
}

fn to_mps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::FootPerSecond => value * METER_PER_FOOT,
        VelocityUnit::KilometerPerHour => value / 3.6,
    }
}

fn from_mps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::FootPerSecond => value / METER_PER_FOOT,
        VelocityUnit::KilometerPerHour => value * 3.6,
    }
}

/// 속도를 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    if from == to {
        return value;
    }
    from_mps(to_mps(value, from), to)
}
