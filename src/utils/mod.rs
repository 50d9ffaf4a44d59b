//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 변환 유틸리티
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//! - [`time_utils`] - BSON/chrono 시각 변환

pub mod string_utils;
pub mod display_terminal;
pub mod time_utils;
