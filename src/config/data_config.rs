//! # 인프라 설정
//!
//! 실행 환경, 비밀번호 해싱, HTTP 서버, 데이터 저장소 관련 설정을
//! 환경 변수에서 읽어오는 정적 설정 구조체들입니다.
//!
//! 모든 값은 호출 시점에 환경 변수를 읽으며, 값이 없거나 파싱에 실패하면
//! 안전한 기본값으로 대체됩니다.
//!
//! | 환경 변수 | 설정 | 기본값 |
//! |-----------|------|--------|
//! | `ENVIRONMENT` | [`Environment::current`] | `production` |
//! | `BCRYPT_COST` | [`PasswordConfig::bcrypt_cost`] | 환경별 4/4/10/12 |
//! | `HOST` / `PORT` / `WORKERS` | [`ServerConfig`] | `0.0.0.0` / `8080` / `4` |
//! | `RATE_LIMIT_PER_SECOND` / `RATE_LIMIT_BURST_SIZE` | [`RateLimitConfig`] | `100` / `200` |
//! | `CORS_ALLOWED_ORIGINS` | [`CorsConfig`] | localhost 개발 오리진 |
//! | `MONGODB_URI` / `DATABASE_NAME` | [`DatabaseConfig`] | `mongodb://localhost:27017` / `sni_events_dev` |
//! | `MONGODB_USE_TRANSACTIONS` | [`DatabaseConfig::use_transactions`] | 운영/스테이징만 `true` |
//! | `REDIS_URL` / `CACHE_TTL_SECONDS` | [`CacheConfig`] | `redis://localhost:6379` / `600` |

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 현재 실행 환경을 결정합니다.
    ///
    /// 값이 없으면 가장 보수적인 `Production`으로 간주합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt cost 값을 반환합니다.
    ///
    /// `BCRYPT_COST`가 4~15 범위의 정수면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        parse_env("PORT", 8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn workers() -> usize {
        parse_env("WORKERS", 4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 요청 속도 제한 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self {
            per_second: parse_env("RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_env("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

/// CORS 허용 오리진 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 쉼표로 구분된 `CORS_ALLOWED_ORIGINS` 값을 파싱합니다.
    pub fn allowed_origins() -> Vec<String> {
        let raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| {
            "http://localhost:3000,http://127.0.0.1:3000,http://localhost:8080,http://127.0.0.1:8080"
                .to_string()
        });

        Self::parse_origins(&raw)
    }

    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "sni_events_dev".to_string())
    }

    /// UnitOfWork 커밋 시 MongoDB 트랜잭션 사용 여부
    ///
    /// 트랜잭션은 레플리카셋에서만 동작하므로 단독 서버로 개발할 때는 끌 수 있습니다.
    pub fn use_transactions() -> bool {
        match env::var("MONGODB_USE_TRANSACTIONS") {
            Ok(value) => parse_bool(&value).unwrap_or(true),
            Err(_) => Self::use_transactions_for_env(&Environment::current()),
        }
    }

    pub fn use_transactions_for_env(env: &Environment) -> bool {
        matches!(env, Environment::Staging | Environment::Production)
    }
}

/// Redis 캐시 설정
pub struct CacheConfig;

impl CacheConfig {
    pub fn redis_url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// 엔티티 캐시 TTL (초)
    pub fn ttl_seconds() -> u64 {
        parse_env("CACHE_TTL_SECONDS", 600)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("{} 파싱 실패, 기본값 사용", key);
            default
        }),
        Err(_) => default,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str("TEST"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
        assert!(Environment::from_str("").is_production());
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_transactions_enabled_only_for_replicated_environments() {
        assert!(!DatabaseConfig::use_transactions_for_env(&Environment::Development));
        assert!(!DatabaseConfig::use_transactions_for_env(&Environment::Test));
        assert!(DatabaseConfig::use_transactions_for_env(&Environment::Staging));
        assert!(DatabaseConfig::use_transactions_for_env(&Environment::Production));
    }

    #[test]
    fn test_parse_origins_skips_blank_entries() {
        let origins = CorsConfig::parse_origins(" http://a.com , ,http://b.com,");
        assert_eq!(origins, vec!["http://a.com".to_string(), "http://b.com".to_string()]);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
