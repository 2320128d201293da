use serde::{Deserialize, Serialize};

/// 유체 물성 상수. 기본값은 물(ρ=1000 kg/m³, g=9.81 m/s²).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidConstants {
    /// 밀도 [kg/m³]
    pub density_kg_per_m3: f64,
    /// 중력가속도 [m/s²]
    pub gravity_m_per_s2: f64,
}

impl FluidConstants {
    pub const WATER: FluidConstants = FluidConstants {
        density_kg_per_m3: 1000.0,
        gravity_m_per_s2: 9.81,
    };

    /// 두 값이 모두 양의 유한수인지 확인한다.
    pub fn is_physical(&self) -> bool {
        self.density_kg_per_m3.is_finite()
            && self.gravity_m_per_s2.is_finite()
            && self.density_kg_per_m3 > 0.0
            && self.gravity_m_per_s2 > 0.0
    }
}

impl Default for FluidConstants {
    fn default() -> Self {
        Self::WATER
    }
}

/// 이론 수력 출력 P = ρ g Q H [W].
pub fn hydraulic_power(rho: f64, g: f64, discharge_m3_per_s: f64, head_m: f64) -> f64 {
    rho * g * discharge_m3_per_s * head_m
}

/// 실제 발전 출력 P_out = P × ηt × ηg [W]. 효율은 0~1 사이의 분율로 받는다.
pub fn electrical_power(hydraulic_w: f64, eta_turbine: f64, eta_generator: f64) -> f64 {
    hydraulic_w * eta_turbine * eta_generator
}
