//! 단위 정의 및 변환 모듈 모음.
//!
//! 수력 계산에서 쓰는 환산 계수는 여기 한 곳에서 관리한다.

pub mod flow;
pub mod length;
pub mod power;
pub mod velocity;
pub mod volume;

pub use flow::{convert_flow, FlowUnit};
pub use length::{convert_length, LengthUnit};
pub use power::{convert_power, PowerUnit};
pub use velocity::{convert_velocity, VelocityUnit};
pub use volume::{convert_volume, VolumeUnit};

/// 1 ft³ = 0.0283168 m³ (1 cusec = 0.0283168 m³/s)
pub const CUBIC_METER_PER_CUBIC_FOOT: f64 = 0.0283168;

/// 1 ft = 0.3048 m
pub const METER_PER_FOOT: f64 = 0.3048;
