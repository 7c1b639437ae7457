//! 성과 분석 입력 도메인 모델.

mod portfolio;
mod trade;

pub use portfolio::*;
pub use trade::*;
