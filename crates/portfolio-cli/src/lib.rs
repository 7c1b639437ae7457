//! 포트폴리오 분석 CLI 도구.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 거래/포트폴리오 스냅샷 JSON 파일 로드
//! - 성과 분석 실행 및 테이블/JSON 출력

pub mod commands;
