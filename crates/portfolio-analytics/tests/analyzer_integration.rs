//! 성과 분석 통합 테스트
//!
//! 거래소 응답 형식 JSON을 읽어 분석하는 전체 흐름을 검증합니다.

use chrono::{Duration, TimeZone, Utc};
use portfolio_analytics::{
    analyze_in_period, analyze_portfolio_performance, PortfolioAnalyzer, Ratio, TradePeriod,
};
use portfolio_core::{AnalysisConfig, AssetInfo, Portfolio, Trade};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn two_trades() -> Vec<Trade> {
    let t1 = Utc.with_ymd_and_hms(2024, 1, 10, 8, 0, 0).unwrap();
    vec![
        Trade::new("BTCUSDT", dec!(100), dec!(10), t1),
        Trade::new("BTCUSDT", dec!(-50), dec!(-5), t1 + Duration::hours(1)),
    ]
}

#[test]
fn test_empty_inputs_summary() {
    let portfolio = Portfolio::new(vec![], dec!(0), dec!(0));
    let summary = analyze_portfolio_performance(&[], &portfolio);

    assert_eq!(summary.total_volume, Decimal::ZERO);
    assert_eq!(summary.total_pnl, Decimal::ZERO);
    assert_eq!(summary.avg_trade_size.value_or_zero(), Decimal::ZERO);
    assert_eq!(summary.trade_count, 0);
    assert_eq!(summary.roi.value_or_zero(), Decimal::ZERO);
    assert!(summary.asset_distribution.is_empty());
}

#[test]
fn test_buy_and_sell_summary() {
    let trades = two_trades();
    let portfolio = Portfolio::new(vec![], dec!(1000), dec!(1100));

    let summary = analyze_portfolio_performance(&trades, &portfolio);

    assert_eq!(summary.total_volume, dec!(150));
    assert_eq!(summary.total_pnl, dec!(5));
    assert_eq!(summary.avg_trade_size.value_or_zero(), dec!(75));
    assert_eq!(summary.trade_count, 2);
    assert_eq!(summary.roi.value_or_zero(), dec!(10));
}

#[test]
fn test_negative_initial_value_guard() {
    let trades = two_trades();
    let portfolio = Portfolio::new(vec![], dec!(-500), dec!(200));

    let summary = analyze_portfolio_performance(&trades, &portfolio);

    assert_eq!(summary.roi, Ratio::Undefined);
    assert_eq!(summary.roi.value_or_zero(), Decimal::ZERO);
    assert_eq!(summary.trade_count, 2);
}

#[test]
fn test_single_zero_quantity_trade() {
    let trades = vec![Trade::new("BTCUSDT", dec!(0), dec!(0), Utc::now())];
    let portfolio = Portfolio::new(vec![], dec!(1000), dec!(1000));

    let summary = analyze_portfolio_performance(&trades, &portfolio);

    assert_eq!(summary.avg_trade_size.value_or_zero(), Decimal::ZERO);
    assert_eq!(summary.total_volume, Decimal::ZERO);
}

#[test]
fn test_exchange_json_snapshot() {
    let trades_json = r#"[
        {"symbol": "BTCUSDT", "quoteQty": "2500.50", "realizedPnL": "120.25", "time": "2024-02-01T10:00:00Z"},
        {"symbol": "ETHUSDT", "quoteQty": "-800", "realizedPnL": "-40.5", "time": "2024-02-02T11:30:00Z"},
        {"symbol": "BTCUSDT", "quoteQty": 1200, "realizedPnL": "0", "time": "2024-02-03T09:15:00Z"}
    ]"#;
    let portfolio_json = r#"{
        "assets": [
            {"symbol": "USDT", "amount": "5000", "currentPrice": "1"},
            {"symbol": "BTC", "amount": "0.1", "currentPrice": "62000"}
        ],
        "initialValue": "10000",
        "currentValue": "11200"
    }"#;

    let trades: Vec<Trade> = serde_json::from_str(trades_json).unwrap();
    let portfolio: Portfolio = serde_json::from_str(portfolio_json).unwrap();

    let summary = PortfolioAnalyzer::default().analyze(&trades, &portfolio).unwrap();

    assert_eq!(summary.total_volume, dec!(4500.50));
    assert_eq!(summary.total_pnl, dec!(79.75));
    assert_eq!(summary.trade_count, 3);
    assert_eq!(summary.roi, Ratio::Computed(dec!(12)));
    assert_eq!(
        summary.asset_distribution,
        &[
            AssetInfo::new("USDT", dec!(5000), dec!(1)),
            AssetInfo::new("BTC", dec!(0.1), dec!(62000)),
        ]
    );

    let output = serde_json::to_value(summary).unwrap();
    assert_eq!(output["tradeCount"], serde_json::json!(3));
    assert_eq!(output["assetDistribution"][1]["symbol"], serde_json::json!("BTC"));
}

#[test]
fn test_strict_and_lenient_analyzers_agree_on_valid_input() {
    let trades = two_trades();
    let portfolio = Portfolio::new(vec![], dec!(1000), dec!(950));

    let lenient = PortfolioAnalyzer::default().analyze(&trades, &portfolio).unwrap();
    let strict = PortfolioAnalyzer::new(AnalysisConfig::strict())
        .analyze(&trades, &portfolio)
        .unwrap();

    assert_eq!(lenient, strict);
    assert_eq!(strict.roi, Ratio::Computed(dec!(-5)));
}

#[test]
fn test_strict_period_analysis_rejects_zero_base() {
    let trades = two_trades();
    let portfolio = Portfolio::new(vec![], dec!(0), dec!(950));
    let analyzer = PortfolioAnalyzer::new(AnalysisConfig::strict());

    assert!(analyzer
        .analyze_in_period(&trades, &portfolio, &TradePeriod::all())
        .is_err());
}

#[test]
fn test_period_analysis_matches_manual_filter() {
    let trades = two_trades();
    let portfolio = Portfolio::new(vec![], dec!(1000), dec!(1100));
    let cutoff = trades[1].time;
    let period = TradePeriod::new(None, Some(cutoff)).unwrap();

    let in_period = analyze_in_period(&trades, &portfolio, &period);
    let manual = analyze_portfolio_performance(&trades[..1], &portfolio);

    assert_eq!(in_period, manual);

    let via_analyzer = PortfolioAnalyzer::default()
        .analyze_in_period(&trades, &portfolio, &period)
        .unwrap();
    assert_eq!(via_analyzer, manual);
}
