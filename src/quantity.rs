/// 단위 변환기가 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Length,
    Volume,
    VolumetricFlow,
    Velocity,
    Power,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 5] = [
        QuantityKind::VolumetricFlow,
        QuantityKind::Velocity,
        QuantityKind::Length,
        QuantityKind::Volume,
        QuantityKind::Power,
    ];

    /// 언어팩 키. `quantity.<name>` 형식.
    pub fn i18n_key(self) -> &'static str {
        match self {
            QuantityKind::Length => "quantity.length",
            QuantityKind::Volume => "quantity.volume",
            QuantityKind::VolumetricFlow => "quantity.flow",
            QuantityKind::Velocity => "quantity.velocity",
            QuantityKind::Power => "quantity.power",
        }
    }

    /// 해당 물리량에서 선택 가능한 단위 기호 목록.
    pub fn unit_symbols(self) -> Vec<&'static str> {
        use crate::units::*;
        match self {
            QuantityKind::Length => LengthUnit::ALL.iter().map(|u| u.symbol()).collect(),
            QuantityKind::Volume => VolumeUnit::ALL.iter().map(|u| u.symbol()).collect(),
            QuantityKind::VolumetricFlow => FlowUnit::ALL.iter().map(|u| u.symbol()).collect(),
            QuantityKind::Velocity => VelocityUnit::ALL.iter().map(|u| u.symbol()).collect(),
            QuantityKind::Power => PowerUnit::ALL.iter().map(|u| u.symbol()).collect(),
        }
    }
}

impl std::str::FromStr for QuantityKind {
    type Err = crate::conversion::ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" | "len" => Ok(QuantityKind::Length),
            "volume" | "vol" => Ok(QuantityKind::Volume),
            "flow" | "discharge" => Ok(QuantityKind::VolumetricFlow),
            "velocity" | "speed" => Ok(QuantityKind::Velocity),
            "power" => Ok(QuantityKind::Power),
            other => Err(crate::conversion::ConversionError::UnsupportedQuantity(
                other.to_string(),
            )),
        }
    }
}
