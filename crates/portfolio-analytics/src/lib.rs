//! 포트폴리오 성과 분석 엔진.
//!
//! 거래 기록 목록과 포트폴리오 스냅샷으로부터 요약 지표를 계산합니다:
//! - 총 거래량 (거래 금액 절대값 합계)
//! - 총 실현 손익
//! - 평균 거래 규모
//! - 거래 횟수
//! - 투자 수익률 (ROI, %)
//! - 자산 분포 (입력 순서 그대로)
//!
//! # Re-exports
//!
//! - [`performance`]: 집계 함수, 설정 기반 분석기, 기간 필터

pub mod performance;

pub use performance::analyzer::{analyze_portfolio_performance, PortfolioAnalyzer};
pub use performance::period::{analyze_in_period, TradePeriod};
pub use performance::ratio::Ratio;
pub use performance::summary::PerformanceSummary;
