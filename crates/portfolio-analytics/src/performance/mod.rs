//! 성과 분석 모듈
//!
//! # 모듈 구성
//!
//! - [`ratio`]: 분모가 정의되지 않을 수 있는 비율 값
//! - [`summary`]: 분석 결과 요약
//! - [`analyzer`]: 집계 함수와 설정 기반 분석기
//! - [`period`]: 체결 시각 기준 거래 필터

pub mod analyzer;
pub mod period;
pub mod ratio;
pub mod summary;

pub use analyzer::*;
pub use period::*;
pub use ratio::*;
pub use summary::*;
