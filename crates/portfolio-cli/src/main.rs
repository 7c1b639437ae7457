//! 포트폴리오 성과 분석 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 전체 기간 분석
//! portfolio analyze -i snapshot.json
//!
//! # 1월 거래만 JSON으로 출력
//! portfolio analyze -i snapshot.json -f 2024-01-01 -t 2024-01-31 --format json
//!
//! # 초기 평가액이 0 이하면 에러로 처리
//! portfolio analyze -i snapshot.json --strict
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use portfolio_cli::commands::analyze::{parse_date, run_analyze, AnalyzeConfig, OutputFormat};
use portfolio_core::{init_logging, AppConfig, LogConfig};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Portfolio performance analytics - 거래 기록 기반 성과 요약", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 경로 (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 거래/포트폴리오 스냅샷 파일 분석
    Analyze {
        /// 스냅샷 JSON 파일 경로
        #[arg(short, long)]
        input: PathBuf,

        /// 시작 날짜 (YYYY-MM-DD, 포함)
        #[arg(short = 'f', long)]
        from: Option<String>,

        /// 종료 날짜 (YYYY-MM-DD, 포함)
        #[arg(short, long)]
        to: Option<String>,

        /// 출력 형식 (table, json)
        #[arg(long, default_value = "table")]
        format: String,

        /// 초기 평가액이 0 이하인 포트폴리오를 에러로 처리
        #[arg(long, default_value = "false")]
        strict: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let app_config = AppConfig::load(cli.config.as_deref())?;
    init_logging(LogConfig::from_settings(&app_config.logging)?)?;

    match cli.command {
        Commands::Analyze {
            input,
            from,
            to,
            format,
            strict,
        } => {
            let mut analysis = app_config.analysis.clone();
            analysis.strict |= strict;

            let config = AnalyzeConfig {
                input,
                from: from.as_deref().map(parse_date).transpose()?,
                to: to.as_deref().map(parse_date).transpose()?,
                format: OutputFormat::parse(&format)?,
                analysis,
            };

            match run_analyze(&config) {
                Ok(output) => {
                    info!("Analysis completed");
                    println!("{}", output);
                }
                Err(e) => {
                    error!("Analysis failed: {:#}", e);
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}
