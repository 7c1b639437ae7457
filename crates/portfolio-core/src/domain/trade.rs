//! 거래 체결 기록.
//!
//! 거래소 API 클라이언트 등 외부 소스가 이미 가져와 정규화한 값을 담습니다.
//! 이 크레이트는 값의 진위나 통화를 검증하지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Amount;

/// 체결된 거래 기록.
///
/// JSON 필드명은 거래소 응답 형식(`quoteQty`, `realizedPnL`)을 그대로 따릅니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// 거래 심볼 (예: "BTCUSDT")
    pub symbol: String,
    /// 호가 통화 기준 거래 금액. 부호는 무시하고 절대값만 사용합니다.
    pub quote_qty: Amount,
    /// 실현 손익 (양수 = 수익, 음수 = 손실)
    #[serde(rename = "realizedPnL")]
    pub realized_pnl: Amount,
    /// 체결 시각
    pub time: DateTime<Utc>,
}

impl Trade {
    /// 새 거래 기록을 생성합니다.
    pub fn new(
        symbol: impl Into<String>,
        quote_qty: Amount,
        realized_pnl: Amount,
        time: DateTime<Utc>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            quote_qty,
            realized_pnl,
            time,
        }
    }

    /// 거래량 (거래 금액의 절대값).
    pub fn volume(&self) -> Amount {
        self.quote_qty.abs()
    }
}
