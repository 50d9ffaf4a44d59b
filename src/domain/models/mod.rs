//! 인증 관련 모델
//!
//! - `auth`: 요청 컨텍스트에 담기는 인증 사용자와 미들웨어 모드
//! - `token`: JWT 클레임

pub mod auth;
pub mod token;
