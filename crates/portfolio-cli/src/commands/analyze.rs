//! 성과 분석 명령.
//!
//! 입력 파일 형식:
//!
//! ```json
//! {
//!   "trades": [
//!     {"symbol": "BTCUSDT", "quoteQty": "100", "realizedPnL": "10", "time": "2024-01-10T08:00:00Z"}
//!   ],
//!   "portfolio": {
//!     "assets": [{"symbol": "BTC", "amount": "0.1", "currentPrice": "62000"}],
//!     "initialValue": "1000",
//!     "currentValue": "1100"
//!   }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use tracing::info;

use portfolio_analytics::{PerformanceSummary, PortfolioAnalyzer, Ratio, TradePeriod};
use portfolio_core::{AnalysisConfig, Amount, DecimalExt, Portfolio, Trade};

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(anyhow::anyhow!("Invalid format: {}. Use: table, json", s)),
        }
    }
}

/// 분석 명령 설정.
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// 스냅샷 파일 경로
    pub input: PathBuf,
    /// 시작 날짜 (포함)
    pub from: Option<NaiveDate>,
    /// 종료 날짜 (포함)
    pub to: Option<NaiveDate>,
    /// 출력 형식
    pub format: OutputFormat,
    /// 분석 설정
    pub analysis: AnalysisConfig,
}

/// 입력 스냅샷.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioSnapshot {
    /// 거래 기록
    #[serde(default)]
    pub trades: Vec<Trade>,
    /// 포트폴리오 상태
    pub portfolio: Portfolio,
}

/// 날짜 파싱 (YYYY-MM-DD).
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date format: {}. Expected YYYY-MM-DD", s))
}

/// 스냅샷 파일을 읽습니다.
pub fn load_snapshot(path: &Path) -> Result<PortfolioSnapshot> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot file: {}", path.display()))
}

/// 날짜 범위를 분석 기간으로 변환합니다.
///
/// 두 날짜 모두 포함되도록 종료는 다음 날 00:00 UTC로 잡습니다.
pub fn build_period(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<TradePeriod> {
    let start = from.map(midnight_utc);
    let end = match to {
        Some(date) => Some(midnight_utc(
            date.succ_opt()
                .with_context(|| format!("Date out of range: {}", date))?,
        )),
        None => None,
    };

    Ok(TradePeriod::new(start, end)?)
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// 분석을 실행하고 출력 문자열을 반환합니다.
pub fn run_analyze(config: &AnalyzeConfig) -> Result<String> {
    let snapshot = load_snapshot(&config.input)?;
    let period = build_period(config.from, config.to)?;
    let analyzer = PortfolioAnalyzer::new(config.analysis.clone());

    info!(
        input = %config.input.display(),
        trades = snapshot.trades.len(),
        period = %period,
        "Running portfolio analysis"
    );

    let summary = analyzer.analyze_in_period(&snapshot.trades, &snapshot.portfolio, &period)?;
    let summary = summary.rounded(config.analysis.decimal_places);

    match config.format {
        OutputFormat::Table => Ok(format_table(&summary, config.analysis.decimal_places)),
        OutputFormat::Json => format_json(&summary),
    }
}

/// 테이블 형식 출력.
///
/// 요약 값은 [`PerformanceSummary::rounded`]를 거친 그대로 출력하므로 JSON
/// 출력과 같은 숫자가 나옵니다. 자산 평가 금액만 여기서 `dp` 자리로 반올림합니다.
pub fn format_table(summary: &PerformanceSummary<'_>, dp: u32) -> String {
    let mut output = String::new();

    output.push_str(&format!("{:<16} {:>20}\n", "METRIC", "VALUE"));
    output.push_str(&"-".repeat(37));
    output.push('\n');

    let rows = [
        ("Trades", summary.trade_count.to_string()),
        ("Total volume", summary.total_volume.to_string()),
        ("Total PnL", summary.total_pnl.to_string()),
        ("Avg trade size", format_ratio(summary.avg_trade_size, dp, false)),
        ("ROI", format_ratio(summary.roi, dp, true)),
    ];
    for (name, value) in rows {
        output.push_str(&format!("{:<16} {:>20}\n", name, value));
    }

    if !summary.asset_distribution.is_empty() {
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>18} {:>18} {:>18}\n",
            "SYMBOL", "AMOUNT", "PRICE", "VALUE"
        ));
        output.push_str(&"-".repeat(67));
        output.push('\n');

        let mut total = Some(Amount::ZERO);
        for asset in summary.asset_distribution {
            let value = asset.market_value();
            total = total.zip(value).and_then(|(sum, value)| sum.checked_add(value));
            output.push_str(&format!(
                "{:<10} {:>18} {:>18} {:>18}\n",
                asset.symbol,
                asset.amount,
                asset.current_price,
                format_amount(value, dp)
            ));
        }
        output.push_str(&format!("{:<48} {:>18}\n", "TOTAL", format_amount(total, dp)));
    }

    output
}

fn format_ratio(ratio: Ratio, dp: u32, percent: bool) -> String {
    match ratio {
        Ratio::Computed(value) if percent => value.to_percent_string(dp),
        Ratio::Computed(value) => value.to_string(),
        Ratio::Undefined => "n/a".to_string(),
    }
}

/// Decimal 범위를 넘어 계산하지 못한 금액은 "n/a"로 표시합니다.
fn format_amount(value: Option<Amount>, dp: u32) -> String {
    value.map_or_else(
        || "n/a".to_string(),
        |value| value.round_display(dp).normalize().to_string(),
    )
}

/// JSON 형식 출력.
pub fn format_json(summary: &PerformanceSummary<'_>) -> Result<String> {
    serde_json::to_string_pretty(summary).context("Failed to serialize to JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::AssetInfo;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("TABLE").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::parse("csv").is_err());
    }

    #[test]
    fn test_build_period_includes_end_date() {
        let from = parse_date("2024-01-01").unwrap();
        let to = parse_date("2024-01-31").unwrap();
        let period = build_period(Some(from), Some(to)).unwrap();

        let last_second = parse_date("2024-01-31")
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap()
            .and_utc();
        assert!(period.contains(last_second));
        assert!(!period.contains(midnight_utc(parse_date("2024-02-01").unwrap())));
    }

    #[test]
    fn test_build_period_rejects_reversed_dates() {
        let from = parse_date("2024-02-01").unwrap();
        let to = parse_date("2024-01-01").unwrap();
        assert!(build_period(Some(from), Some(to)).is_err());
    }

    #[test]
    fn test_parse_date_error() {
        assert!(parse_date("2024/01/01").is_err());
    }

    #[test]
    fn test_format_table() {
        let assets = vec![AssetInfo::new("BTC", dec!(0.5), dec!(60000))];
        let summary = PerformanceSummary {
            total_volume: dec!(150),
            total_pnl: dec!(5),
            avg_trade_size: Ratio::Computed(dec!(75)),
            trade_count: 2,
            roi: Ratio::Undefined,
            asset_distribution: &assets,
        };

        let table = format_table(&summary, 2);
        assert!(table.contains(" 150\n"));
        assert!(table.contains(" 75\n"));
        assert!(!table.contains("150.00"));
        assert!(table.contains("n/a"));
        assert!(table.contains(" 30000\n"));
    }

    #[test]
    fn test_format_table_matches_rounded_json() {
        let summary = PerformanceSummary {
            total_volume: dec!(100.456),
            total_pnl: dec!(-3.5),
            avg_trade_size: Ratio::Computed(dec!(33.485333)),
            trade_count: 3,
            roi: Ratio::Computed(dec!(12.3456)),
            asset_distribution: &[],
        }
        .rounded(2);

        let table = format_table(&summary, 2);
        let json = format_json(&summary).unwrap();
        assert!(table.contains(" 100.46\n"));
        assert!(table.contains(" -3.5\n"));
        assert!(table.contains(" 33.49\n"));
        assert!(table.contains(" 12.35%\n"));
        assert!(json.contains("\"100.46\""));
        assert!(json.contains("\"-3.5\""));
    }

    #[test]
    fn test_format_table_out_of_range_market_value() {
        let assets = vec![
            AssetInfo::new("BTC", Decimal::MAX, dec!(2)),
            AssetInfo::new("ETH", dec!(1), dec!(3000)),
        ];
        let summary = PerformanceSummary {
            total_volume: dec!(0),
            total_pnl: dec!(0),
            avg_trade_size: Ratio::Undefined,
            trade_count: 0,
            roi: Ratio::Undefined,
            asset_distribution: &assets,
        };

        let table = format_table(&summary, 2);
        let btc_row = table.lines().find(|line| line.starts_with("BTC")).unwrap();
        assert!(btc_row.ends_with("n/a"));
        let eth_row = table.lines().find(|line| line.starts_with("ETH")).unwrap();
        assert!(eth_row.ends_with("3000"));
        let total_row = table.lines().find(|line| line.starts_with("TOTAL")).unwrap();
        assert!(total_row.ends_with("n/a"));
    }
}
