use std::f64::consts::PI;

/// 연속 방정식 Q = A·v 로부터 수압관 내경 D = √(4Q / πv) [m]를 구한다.
///
/// 유속이 0 이하이면 관경을 정의할 수 없으므로 `None`을 반환한다.
/// 호출 측은 이를 오류 상태로 표시하고 나머지 결과는 그대로 보여준다.
pub fn penstock_diameter(discharge_m3_per_s: f64, velocity_m_per_s: f64) -> Option<f64> {
    if velocity_m_per_s <= 0.0 {
        return None;
    }
    Some((4.0 * discharge_m3_per_s / (PI * velocity_m_per_s)).sqrt())
}
