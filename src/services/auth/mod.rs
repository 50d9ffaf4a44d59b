//! 인증 서비스

pub mod token_service;

pub use token_service::{JwtSettings, TokenService};
