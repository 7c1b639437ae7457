//! 정의되지 않을 수 있는 비율 값.
//!
//! 평균 거래 규모(거래가 없을 때)와 ROI(초기 평가액이 0 이하일 때)는
//! 분모가 의미를 갖지 않을 수 있습니다. 두 경우를 조용히 0으로 바꾸는 대신
//! `Ratio::Undefined`로 구분하고, 기존 동작이 필요한 곳은
//! [`Ratio::value_or_zero`]로 0을 얻습니다.
//!
//! JSON으로는 계산된 값은 숫자 문자열, 정의되지 않은 값은 `null`로 직렬화됩니다.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 계산 가능 여부가 표시된 비율.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Decimal>", into = "Option<Decimal>")]
pub enum Ratio {
    /// 계산된 값
    Computed(Decimal),
    /// 분모가 0 이하라서 계산하지 않음
    Undefined,
}

impl Ratio {
    /// `denominator > 0`일 때만 `numerator / denominator`를 계산합니다.
    ///
    /// 나눗셈이 Decimal 범위를 넘으면 `Undefined`입니다.
    /// 결과는 뒤쪽 0을 제거한 형태로 정규화됩니다 (10.0 → 10).
    pub fn over_positive(numerator: Decimal, denominator: Decimal) -> Self {
        if denominator <= Decimal::ZERO {
            return Ratio::Undefined;
        }

        numerator
            .checked_div(denominator)
            .map_or(Ratio::Undefined, |value| Ratio::Computed(value.normalize()))
    }

    /// 계산된 값에 `factor`를 곱합니다 (예: 백분율 변환).
    pub fn scaled(self, factor: Decimal) -> Self {
        match self {
            Ratio::Computed(value) => value
                .checked_mul(factor)
                .map_or(Ratio::Undefined, |scaled| Ratio::Computed(scaled.normalize())),
            Ratio::Undefined => Ratio::Undefined,
        }
    }

    /// 계산된 값, 정의되지 않았으면 0.
    pub fn value_or_zero(self) -> Decimal {
        self.value().unwrap_or(Decimal::ZERO)
    }

    /// 계산된 값.
    pub fn value(self) -> Option<Decimal> {
        match self {
            Ratio::Computed(value) => Some(value),
            Ratio::Undefined => None,
        }
    }
}

impl From<Option<Decimal>> for Ratio {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(Ratio::Undefined, Ratio::Computed)
    }
}

impl From<Ratio> for Option<Decimal> {
    fn from(ratio: Ratio) -> Self {
        ratio.value()
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ratio::Computed(value) => fmt::Display::fmt(value, f),
            Ratio::Undefined => write!(f, "n/a"),
        }
    }
}
