//! # Configuration Module
//!
//! 환경 변수 기반 설정값들을 모아둔 모듈입니다.
//!
//! - [`data_config`] - 실행 환경, 서버, MongoDB, Redis, CORS, 속도 제한 설정
//! - [`auth_config`] - JWT 서명/검증 설정
//!
//! `.env` 파일은 `main`에서 `PROFILE` 값에 따라 로드되며, 여기의 구조체들은
//! 로드된 환경 변수를 읽기만 합니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
