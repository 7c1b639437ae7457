//! 정밀한 금융 계산을 위한 Decimal 유틸리티.
//!
//! 모든 금액은 부동소수점 대신 `rust_decimal::Decimal`로 다룹니다.
//! 합산 순서와 무관하게 결과가 같고 NaN/무한대가 존재하지 않습니다.

use rust_decimal::{Decimal, RoundingStrategy};

/// 호가 통화 기준 금액.
pub type Amount = Decimal;

/// 자산 수량.
pub type Quantity = Decimal;

/// 가격.
pub type Price = Decimal;

/// 출력용 Decimal 확장 트레이트.
pub trait DecimalExt {
    /// 지정된 소수점 자릿수로 반올림합니다 (0.5는 0에서 먼 쪽으로).
    fn round_display(&self, dp: u32) -> Decimal;

    /// 이미 퍼센트 단위인 값을 반올림해 문자열로 변환합니다 (예: 10.456 → "10.46%").
    fn to_percent_string(&self, dp: u32) -> String;
}

impl DecimalExt for Decimal {
    fn round_display(&self, dp: u32) -> Decimal {
        self.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
    }

    fn to_percent_string(&self, dp: u32) -> String {
        format!("{}%", self.round_display(dp))
    }
}
