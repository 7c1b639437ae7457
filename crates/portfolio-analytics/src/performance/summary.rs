//! 성과 분석 결과 요약.

use serde::Serialize;

use portfolio_core::{Amount, AssetInfo, DecimalExt};

use super::ratio::Ratio;

/// 포트폴리오 성과 요약.
///
/// `asset_distribution`은 입력 포트폴리오의 자산 목록을 복사하지 않고
/// 그대로 빌려옵니다. 따라서 요약은 포트폴리오보다 오래 살 수 없습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary<'a> {
    /// 총 거래량 (|거래 금액| 합계, 항상 0 이상)
    pub total_volume: Amount,
    /// 총 실현 손익
    #[serde(rename = "totalPnL")]
    pub total_pnl: Amount,
    /// 평균 거래 규모 (거래가 없으면 `Undefined`)
    pub avg_trade_size: Ratio,
    /// 거래 횟수
    pub trade_count: usize,
    /// 투자 수익률 % (초기 평가액이 0 이하면 `Undefined`)
    pub roi: Ratio,
    /// 자산 분포
    pub asset_distribution: &'a [AssetInfo],
}

impl PerformanceSummary<'_> {
    /// 금액 필드를 `dp` 자리로 반올림한 사본을 반환합니다.
    ///
    /// 화면 출력용이며 계산된/정의되지 않은 상태는 그대로 유지됩니다.
    pub fn rounded(&self, dp: u32) -> Self {
        let round = |ratio: Ratio| match ratio {
            Ratio::Computed(value) => Ratio::Computed(value.round_display(dp)),
            Ratio::Undefined => Ratio::Undefined,
        };

        Self {
            total_volume: self.total_volume.round_display(dp),
            total_pnl: self.total_pnl.round_display(dp),
            avg_trade_size: round(self.avg_trade_size),
            roi: round(self.roi),
            ..*self
        }
    }
}
