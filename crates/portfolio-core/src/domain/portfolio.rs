//! 포트폴리오 스냅샷.
//!
//! 가격 평가는 외부에서 이미 끝난 상태로 들어옵니다. `initial_value`와
//! `current_value`는 분석 구간의 시작/현재 평가액이며 보유 자산 목록에서
//! 다시 계산하지 않습니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Amount, Price, Quantity};

/// 보유 자산 정보.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInfo {
    /// 자산 심볼
    pub symbol: String,
    /// 보유 수량
    pub amount: Quantity,
    /// 최신 가격
    pub current_price: Price,
}

impl AssetInfo {
    /// 새 자산 정보를 생성합니다.
    pub fn new(symbol: impl Into<String>, amount: Quantity, current_price: Price) -> Self {
        Self {
            symbol: symbol.into(),
            amount,
            current_price,
        }
    }

    /// 평가 금액 (수량 × 가격).
    ///
    /// 곱이 Decimal 범위를 넘으면 `None`입니다.
    pub fn market_value(&self) -> Option<Amount> {
        self.amount.checked_mul(self.current_price)
    }
}

/// 분석 시점의 포트폴리오 상태.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    /// 자산 분포 (표시 순서 유지)
    #[serde(default)]
    pub assets: Vec<AssetInfo>,
    /// 분석 시작 시점 평가액
    pub initial_value: Amount,
    /// 현재 평가액
    pub current_value: Amount,
}

impl Portfolio {
    /// 새 포트폴리오 스냅샷을 생성합니다.
    pub fn new(assets: Vec<AssetInfo>, initial_value: Amount, current_value: Amount) -> Self {
        Self {
            assets,
            initial_value,
            current_value,
        }
    }

    /// 보유 자산 평가 금액 합계.
    ///
    /// 참고용 값이며 ROI 계산에는 사용되지 않습니다.
    /// 어느 단계에서든 Decimal 범위를 넘으면 `None`입니다.
    pub fn assets_market_value(&self) -> Option<Amount> {
        self.assets
            .iter()
            .try_fold(Decimal::ZERO, |total, asset| total.checked_add(asset.market_value()?))
    }

    /// 평가액 변화 (현재 - 초기). 뺄셈이 Decimal 범위를 넘으면 `None`입니다.
    pub fn value_change(&self) -> Option<Amount> {
        self.current_value.checked_sub(self.initial_value)
    }

    /// 초기 평가액이 ROI 기준값으로 쓸 수 있는 양수인지 확인합니다.
    pub fn has_positive_base(&self) -> bool {
        self.initial_value > Decimal::ZERO
    }
}
