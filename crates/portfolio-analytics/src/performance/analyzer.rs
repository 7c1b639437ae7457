//! 포트폴리오 성과 집계.
//!
//! [`analyze_portfolio_performance`]는 입력을 읽기만 하는 순수 함수입니다.
//! 거래 목록을 한 번 순회하며(O(n)), 누적기 외의 추가 메모리를 쓰지 않습니다.
//!
//! # 사용 예시
//!
//! ```rust
//! use chrono::Utc;
//! use portfolio_analytics::{analyze_portfolio_performance, Ratio};
//! use portfolio_core::{Portfolio, Trade};
//! use rust_decimal_macros::dec;
//!
//! let now = Utc::now();
//! let trades = vec![
//!     Trade::new("BTCUSDT", dec!(100), dec!(10), now),
//!     Trade::new("BTCUSDT", dec!(-50), dec!(-5), now),
//! ];
//! let portfolio = Portfolio::new(vec![], dec!(1000), dec!(1100));
//!
//! let summary = analyze_portfolio_performance(&trades, &portfolio);
//! assert_eq!(summary.total_volume, dec!(150));
//! assert_eq!(summary.avg_trade_size, Ratio::Computed(dec!(75)));
//! assert_eq!(summary.roi.value_or_zero(), dec!(10));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use portfolio_core::{
    analysis_span, AnalysisConfig, AnalyticsError, AnalyticsResult, Portfolio, Trade,
};

use super::period::TradePeriod;
use super::ratio::Ratio;
use super::summary::PerformanceSummary;

const PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// 거래 목록과 포트폴리오 스냅샷에서 성과 요약을 계산합니다.
///
/// 실패하지 않습니다. 거래가 없으면 평균 거래 규모가, 초기 평가액이 0 이하면
/// ROI가 `Ratio::Undefined`가 됩니다 (`value_or_zero()`는 0).
///
/// 합계가 Decimal 범위(약 ±7.9e28)를 넘으면 해당 합계는 `Decimal::MAX`
/// 또는 `Decimal::MIN`에 고정되고 평균 거래 규모는 `Undefined`입니다.
/// 이 경우를 에러로 받으려면 [`PortfolioAnalyzer`]를 사용하세요.
pub fn analyze_portfolio_performance<'a>(
    trades: &[Trade],
    portfolio: &'a Portfolio,
) -> PerformanceSummary<'a> {
    summarize(trades.iter(), portfolio).summary
}

/// 한 번의 순회 결과.
pub(crate) struct Summarized<'a> {
    pub(crate) summary: PerformanceSummary<'a>,
    /// 합계 중 하나라도 Decimal 범위에 막혀 고정되었는지 여부
    pub(crate) saturated: bool,
}

/// 거래 반복자를 한 번 순회하여 요약을 만듭니다.
pub(crate) fn summarize<'t, 'a, I>(trades: I, portfolio: &'a Portfolio) -> Summarized<'a>
where
    I: IntoIterator<Item = &'t Trade>,
{
    let mut total_volume = Decimal::ZERO;
    let mut total_pnl = Decimal::ZERO;
    let mut trade_count = 0usize;
    let mut saturated = false;

    for trade in trades {
        total_volume = saturating_sum(total_volume, trade.volume(), &mut saturated);
        total_pnl = saturating_sum(total_pnl, trade.realized_pnl, &mut saturated);
        trade_count += 1;
    }

    let avg_trade_size = if saturated {
        Ratio::Undefined
    } else {
        Ratio::over_positive(total_volume, Decimal::from(trade_count))
    };
    let roi = return_on_investment(portfolio);

    Summarized {
        summary: PerformanceSummary {
            total_volume,
            total_pnl,
            avg_trade_size,
            trade_count,
            roi,
            asset_distribution: &portfolio.assets,
        },
        saturated,
    }
}

fn saturating_sum(total: Decimal, value: Decimal, saturated: &mut bool) -> Decimal {
    total.checked_add(value).unwrap_or_else(|| {
        *saturated = true;
        total.saturating_add(value)
    })
}

/// ROI (%) = (현재 평가액 - 초기 평가액) / 초기 평가액 × 100.
///
/// 초기 평가액이 0 이하이거나 계산 중 Decimal 범위를 넘으면 `Undefined`입니다.
pub fn return_on_investment(portfolio: &Portfolio) -> Ratio {
    if !portfolio.has_positive_base() {
        return Ratio::Undefined;
    }
    portfolio.value_change().map_or(Ratio::Undefined, |change| {
        Ratio::over_positive(change, portfolio.initial_value).scaled(PERCENT)
    })
}

/// 설정 기반 성과 분석기.
///
/// 기본 설정에서는 [`analyze_portfolio_performance`]와 같은 결과를 `Ok`로
/// 돌려줍니다. 거래 합계가 Decimal 범위를 넘으면 설정과 관계없이
/// `AnalyticsError::InvalidInput`을 반환합니다. `strict` 설정이면 초기 평가액이
/// 0 이하인 포트폴리오도 같은 에러로 거부합니다.
#[derive(Debug, Clone, Default)]
pub struct PortfolioAnalyzer {
    config: AnalysisConfig,
}

impl PortfolioAnalyzer {
    /// 새 분석기를 생성합니다.
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// 분석 설정.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// 전체 거래를 분석합니다.
    pub fn analyze<'a>(
        &self,
        trades: &[Trade],
        portfolio: &'a Portfolio,
    ) -> AnalyticsResult<PerformanceSummary<'a>> {
        let span = analysis_span!("analyze_portfolio", trades.len(), portfolio.assets.len());
        let _enter = span.enter();

        self.validate(portfolio)?;
        finish(summarize(trades.iter(), portfolio))
    }

    /// 체결 시각이 `period` 안에 있는 거래만 분석합니다.
    pub fn analyze_in_period<'a>(
        &self,
        trades: &[Trade],
        portfolio: &'a Portfolio,
        period: &TradePeriod,
    ) -> AnalyticsResult<PerformanceSummary<'a>> {
        let span = analysis_span!("analyze_portfolio_period", trades.len());
        let _enter = span.enter();

        self.validate(portfolio)?;
        debug!(period = %period, "Filtering trades by period");
        finish(summarize(period.filter(trades), portfolio))
    }

    fn validate(&self, portfolio: &Portfolio) -> AnalyticsResult<()> {
        if self.config.strict && !portfolio.has_positive_base() {
            return Err(AnalyticsError::InvalidInput(format!(
                "초기 평가액은 0보다 커야 합니다: {}",
                portfolio.initial_value
            )));
        }
        Ok(())
    }
}

fn finish(result: Summarized<'_>) -> AnalyticsResult<PerformanceSummary<'_>> {
    let Summarized { summary, saturated } = result;
    if saturated {
        warn!(
            trade_count = summary.trade_count,
            "Trade totals exceeded the decimal range"
        );
        return Err(AnalyticsError::InvalidInput(format!(
            "거래 합계가 Decimal 범위를 벗어났습니다 (거래 {}건)",
            summary.trade_count
        )));
    }

    log_summary(&summary);
    Ok(summary)
}

fn log_summary(summary: &PerformanceSummary<'_>) {
    debug!(
        trade_count = summary.trade_count,
        total_volume = %summary.total_volume,
        total_pnl = %summary.total_pnl,
        roi = %summary.roi,
        "Portfolio performance analyzed"
    );
}
