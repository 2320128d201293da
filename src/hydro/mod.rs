//! 소수력 발전소 기본 설계값 계산 모듈 모음.
//! 수력 출력, 발전 출력, 수압관(penstock) 관경, 수차 형식 추천으로 구성한다.
//! 모든 계산은 입력만으로 결정되는 순수 함수이다.

pub mod penstock;
pub mod plant;
pub mod power;
pub mod turbine;

pub use penstock::penstock_diameter;
pub use plant::{compute, evaluate, Efficiency, InputError, PlantInputs, PlantResult, ValidatedInputs};
pub use power::{electrical_power, hydraulic_power, FluidConstants};
pub use turbine::{classify_turbine, HeadClass, TurbineType};
