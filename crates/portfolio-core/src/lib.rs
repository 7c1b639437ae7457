//! # Portfolio Core
//!
//! 포트폴리오 성과 분석의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 분석 엔진과 CLI가 공유하는 기본 타입을 제공합니다:
//! - 거래 기록 (`Trade`)
//! - 보유 자산 및 포트폴리오 스냅샷 (`AssetInfo`, `Portfolio`)
//! - 금액/퍼센트 Decimal 타입
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use self::config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
