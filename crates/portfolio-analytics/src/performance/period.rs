//! 체결 시각 기준 거래 필터.
//!
//! 분석 구간은 반열린 구간 `[from, to)`이며 생략된 경계는 무한대로 취급합니다.
//! ROI는 구간과 무관하게 포트폴리오 스냅샷의 평가액으로 계산됩니다.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use portfolio_core::{AnalyticsError, AnalyticsResult, Portfolio, Trade};

use super::analyzer::summarize;
use super::summary::PerformanceSummary;

/// 분석 기간.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradePeriod {
    /// 시작 시각 (포함)
    pub from: Option<DateTime<Utc>>,
    /// 종료 시각 (제외)
    pub to: Option<DateTime<Utc>>,
}

impl TradePeriod {
    /// 새 분석 기간을 생성합니다.
    ///
    /// 두 경계가 모두 있고 `from >= to`이면 빈 구간이므로 거부합니다.
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> AnalyticsResult<Self> {
        if let (Some(start), Some(end)) = (from, to) {
            if start >= end {
                return Err(AnalyticsError::InvalidInput(format!(
                    "시작 시각은 종료 시각보다 앞서야 합니다: {} >= {}",
                    start, end
                )));
            }
        }
        Ok(Self { from, to })
    }

    /// 경계가 없는 전체 기간.
    pub fn all() -> Self {
        Self::default()
    }

    /// 주어진 시각이 기간 안에 있는지 확인합니다.
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        self.from.map_or(true, |from| time >= from) && self.to.map_or(true, |to| time < to)
    }

    /// 기간 안의 거래를 입력 순서대로 반환합니다.
    pub fn filter<'t>(&self, trades: &'t [Trade]) -> impl Iterator<Item = &'t Trade> + 't {
        let period = *self;
        trades.iter().filter(move |trade| period.contains(trade.time))
    }
}

impl fmt::Display for TradePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.from {
            Some(from) => write!(f, "[{}", from.to_rfc3339())?,
            None => write!(f, "(-inf")?,
        }
        match self.to {
            Some(to) => write!(f, ", {})", to.to_rfc3339()),
            None => write!(f, ", +inf)"),
        }
    }
}

/// 기간 안의 거래만으로 성과 요약을 계산합니다.
pub fn analyze_in_period<'a>(
    trades: &[Trade],
    portfolio: &'a Portfolio,
    period: &TradePeriod,
) -> PerformanceSummary<'a> {
    summarize(period.filter(trades), portfolio).summary
}
