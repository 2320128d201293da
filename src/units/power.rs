use serde::{Deserialize, Serialize};

/// 1 mechanical horsepower = 745.69987 W
const WATT_PER_HORSEPOWER: f64 = 745.699_871_582_270_2;

/// 동력 단위. 내부 기준은 W이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    Megawatt,
    Horsepower,
}

impl PowerUnit {
    pub const ALL: [PowerUnit; 4] = [
        PowerUnit::Watt,
        PowerUnit::Kilowatt,
        PowerUnit::Megawatt,
        PowerUnit::Horsepower,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            PowerUnit::Watt => "W",
            PowerUnit::Kilowatt => "kW",
            PowerUnit::Megawatt => "MW",
            PowerUnit::Horsepower => "hp",
        }
    }
}

fn to_watt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value * 1e3,
        PowerUnit::Megawatt => value * 1e6,
        PowerUnit::Horsepower => value * WATT_PER_HORSEPOWER,
    }
}

fn from_watt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value / 1e3,
        PowerUnit::Megawatt => value / 1e6,
        PowerUnit::Horsepower => value / WATT_PER_HORSEPOWER,
    }
}

/// 동력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    if from == to {
        return value;
    }
    from_watt(to_watt(value, from), to)
}
