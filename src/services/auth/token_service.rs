//! # JWT 토큰 서비스
//!
//! HS256 액세스 토큰을 발급하고 검증합니다. 리프레시 토큰은 없으며,
//! 만료된 토큰은 다시 로그인해서 교체합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind};
use singleton_macro::service;
use uuid::Uuid;
use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::entities::users::User;
use crate::domain::models::token::TokenClaims;

/// 토큰 서명/검증에 필요한 설정 묶음
///
/// 운영에서는 [`JwtSettings::from_env`]로 요청마다 환경 변수를 읽습니다.
#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub expire_minutes: i64,
}

impl JwtSettings {
    pub fn from_env() -> Self {
        Self {
            secret: JwtConfig::secret(),
            issuer: JwtConfig::issuer(),
            audience: JwtConfig::audience(),
            expire_minutes: JwtConfig::expire_minutes(),
        }
    }

    /// 토큰 유효 시간 (초)
    pub fn expires_in_seconds(&self) -> i64 {
        self.expire_minutes * 60
    }

    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.expire_minutes);

        let claims = TokenClaims {
            sub: user.id_string(),
            name: user.name.clone(),
            email: user.email.as_str().to_string(),
            role: user.role,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 서명, 만료, 발급자, 대상을 검증하고 클레임을 반환합니다.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());

        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => {
                    AppError::AuthenticationError("이 서비스에서 발급한 토큰이 아닙니다".to_string())
                }
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })
    }
}

/// JWT 액세스 토큰 서비스
///
/// 상태 없이 호출 시점의 [`JwtSettings::from_env`]를 사용합니다.
#[service(name = "token")]
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    pub fn expires_in_seconds(&self) -> i64 {
        JwtSettings::from_env().expires_in_seconds()
    }

    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        JwtSettings::from_env().issue(user)
    }

    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        JwtSettings::from_env().verify(token)
    }

    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::UserRole;
    use crate::domain::value_objects::{Cpf, Email, Password, PhoneNumber};

    fn settings(expire_minutes: i64) -> JwtSettings {
        JwtSettings {
            secret: "test-secret".into(),
            issuer: "sni-events".into(),
            audience: "sni-events-clients".into(),
            expire_minutes,
        }
    }

    fn user() -> User {
        User::new(
            "Maria Souza",
            Email::parse("maria@sni.org").unwrap(),
            Password::hash("segredo123", 4).unwrap(),
            PhoneNumber::parse("11987654321").unwrap(),
            Cpf::parse("52998224725").unwrap(),
            UserRole::Admin,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_generate_and_verify() {
        let settings = settings(60);
        let user = user();

        let token = settings.issue(&user).unwrap();
        let claims = settings.verify(&token).unwrap();

        assert_eq!(claims.sub, user.id_string());
        assert_eq!(claims.email, "maria@sni.org");
        assert_eq!(claims.role, UserRole::Admin);
        assert_eq!(claims.exp - claims.iat, 3600);
        assert_eq!(settings.expires_in_seconds(), 3600);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let settings = settings(-5);
        let token = settings.issue(&user()).unwrap();

        match settings.verify(&token) {
            Err(AppError::AuthenticationError(message)) => assert!(message.contains("만료")),
            other => panic!("expected expiry error, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_audience_is_rejected() {
        let token = settings(60).issue(&user()).unwrap();
        let other = JwtSettings {
            audience: "another-app".into(),
            ..settings(60)
        };

        assert!(matches!(other.verify(&token), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let settings = settings(60);
        let token = settings.issue(&user()).unwrap();
        let tampered = format!("{}x", token);

        assert!(settings.verify(&tampered).is_err());
    }

    #[test]
    fn test_service_round_trip_with_environment_settings() {
        let service = TokenService::instance();
        let user = user();

        let token = service.generate_access_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user.id_string());
        assert_eq!(service.expires_in_seconds(), JwtConfig::expire_minutes() * 60);
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::instance();

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }
}
