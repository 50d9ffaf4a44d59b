//! # 인증 설정
//!
//! JWT 서명 및 검증에 필요한 값들을 환경 변수에서 읽습니다.

use std::env;

pub struct JwtConfig;

impl JwtConfig {
    /// HS256 서명 키
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "sni-events-dev-secret".to_string()
        })
    }

    /// 토큰 발급자 (`iss` 클레임)
    pub fn issuer() -> String {
        env::var("JWT_ISSUER").unwrap_or_else(|_| "sni-events".to_string())
    }

    /// 토큰 대상 (`aud` 클레임)
    pub fn audience() -> String {
        env::var("JWT_AUDIENCE").unwrap_or_else(|_| "sni-events-clients".to_string())
    }

    /// 액세스 토큰 유효 시간 (분)
    pub fn expire_minutes() -> i64 {
        env::var("JWT_EXPIRE_MINUTES")
            .ok()
            .and_then(|value| value.trim().parse::<i64>().ok())
            .filter(|minutes| *minutes > 0)
            .unwrap_or(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_defaults() {
        if env::var("JWT_EXPIRE_MINUTES").is_err() {
            assert_eq!(JwtConfig::expire_minutes(), 60);
        }
        if env::var("JWT_ISSUER").is_err() {
            assert_eq!(JwtConfig::issuer(), "sni-events");
        }
        assert!(!JwtConfig::secret().is_empty());
    }
}
