//! # Redis 캐시 클라이언트
//!
//! 엔티티 단건 조회 결과를 JSON으로 캐싱하는 얇은 래퍼입니다.
//! 캐시는 최적화 수단일 뿐이므로 호출하는 쪽은 실패를 로그로만 남기고 무시합니다.
//!
//! ## 연결 관리
//!
//! `ConnectionManager`를 사용해 하나의 멀티플렉싱 연결을 공유하며,
//! 연결이 끊기면 자동으로 재연결합니다.
//!
//! ## 키 규칙
//!
//! `{entity}:{object_id}` 형태 (`user:65f1...`, `dinner:65f2...`).

use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisError};
use serde::{Serialize, de::DeserializeOwned};
use crate::config::CacheConfig;

#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// `REDIS_URL`로 연결하고 `PING`으로 서버 가용성을 확인합니다.
    pub async fn new() -> Result<Self, RedisError> {
        let client = Client::open(CacheConfig::redis_url())?;
        let mut manager = client.get_connection_manager().await?;

        redis::cmd("PING").query_async::<()>(&mut manager).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { manager })
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, RedisError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await?;

        value.map(|json| decode(&json)).transpose()
    }

    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<(), RedisError> {
        let mut conn = self.manager.clone();
        let json = encode(value)?;
        conn.set_ex(key, json, seconds).await
    }

    pub async fn del(&self, key: &str) -> Result<(), RedisError> {
        let mut conn = self.manager.clone();
        conn.del(key).await
    }

    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>, RedisError> {
        let mut conn = self.manager.clone();
        conn.keys(pattern).await
    }

    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), RedisError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.manager.clone();
        conn.del(keys).await
    }
}

/// 엔티티 캐시 키
pub fn entity_key(entity: &str, id: &str) -> String {
    format!("{}:{}", entity, id)
}

fn encode<T: Serialize>(value: &T) -> Result<String, RedisError> {
    serde_json::to_string(value)
        .map_err(|e| RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))
}

fn decode<T: DeserializeOwned>(json: &str) -> Result<T, RedisError> {
    serde_json::from_str(json)
        .map_err(|e| RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct CachedDinner {
        name: String,
        price_cents: i64,
    }

    #[test]
    fn test_entity_key_format() {
        assert_eq!(entity_key("dinner", "65f1a2b3c4d5e6f708091a2b"), "dinner:65f1a2b3c4d5e6f708091a2b");
    }

    #[test]
    fn test_encode_decode() {
        let dinner = CachedDinner { name: "Jantar".into(), price_cents: 15_000 };
        let json = encode(&dinner).unwrap();

        assert_eq!(decode::<CachedDinner>(&json).unwrap(), dinner);
        assert!(decode::<CachedDinner>("{not json").is_err());
    }
}
