//! 설정 관리.
//!
//! 기본값 → 설정 파일(선택) → `PORTFOLIO__` 접두사 환경 변수 순서로 덮어씁니다.
//!
//! ```toml
//! [logging]
//! level = "info"
//! format = "pretty"
//!
//! [analysis]
//! strict = false
//! decimal_places = 2
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::AnalyticsResult;

/// 환경 변수 접두사 (예: `PORTFOLIO__ANALYSIS__STRICT=true`).
pub const ENV_PREFIX: &str = "PORTFOLIO";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 분석 설정
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 분석 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// 엄격 모드.
    ///
    /// 켜면 초기 가치가 0 이하인 포트폴리오를 0으로 대체하지 않고 에러로 거부합니다.
    #[serde(default)]
    pub strict: bool,
    /// 출력 시 소수점 자릿수
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

fn default_decimal_places() -> u32 {
    2
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            strict: false,
            decimal_places: default_decimal_places(),
        }
    }
}

impl AnalysisConfig {
    /// 엄격 모드 설정을 생성합니다.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Default::default()
        }
    }
}

impl AppConfig {
    /// 설정 파일(선택)과 환경 변수에서 설정을 로드합니다.
    ///
    /// `path`가 주어지면 파일이 반드시 존재해야 합니다.
    pub fn load(path: Option<&Path>) -> AnalyticsResult<Self> {
        let mut builder = config::Config::builder()
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .set_default("analysis.strict", false)?
            .set_default("analysis.decimal_places", 2)?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
