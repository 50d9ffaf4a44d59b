//! # 공통 리포지토리 동작
//!
//! 모든 애그리거트 리포지토리가 공유하는 조회/스테이징 기능입니다.
//! 구현체는 `db()`, `redis()`와 두 상수만 제공하면 됩니다.
//!
//! ## 캐싱
//!
//! `find_by_id`만 Redis read-through 캐시를 사용합니다 (`{entity}:{id}`, TTL `CACHE_TTL_SECONDS`).
//! 명세 기반 조회는 항상 MongoDB를 직접 조회합니다.
//! 캐시 오류는 경고 로그만 남기고 저장소 조회로 대체합니다.
//!
//! ## 쓰기
//!
//! 리포지토리는 직접 쓰지 않습니다. `stage_insert`/`stage_update`로 [`UnitOfWork`]에
//! 변경을 기록하고, 유스케이스가 `commit()`합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc, oid::ObjectId};
use serde::{Serialize, de::DeserializeOwned};
use crate::caching::redis::{RedisClient, entity_key};
use crate::config::CacheConfig;
use crate::core::errors::AppResult;
use crate::db::{Database, UnitOfWork};
use crate::domain::entities::base::Auditable;
use crate::domain::specifications::{Specification, not_deleted};

/// 정렬과 페이지 범위
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    pub sort: Option<Document>,
    pub skip: Option<u64>,
    pub limit: Option<i64>,
}

impl QueryOptions {
    /// 한 필드 오름차순 정렬
    pub fn sorted_by(field: &str) -> Self {
        Self {
            sort: Some(doc! { field: 1 }),
            ..Self::default()
        }
    }

    /// 1부터 시작하는 페이지 번호로 범위를 지정합니다.
    pub fn page(mut self, page_number: u64, page_size: u64) -> Self {
        self.skip = Some(page_number.saturating_sub(1) * page_size);
        self.limit = Some(page_size as i64);
        self
    }
}

#[async_trait]
pub trait BaseRepository<T>: Send + Sync
where
    T: Auditable + Serialize + DeserializeOwned + Send + Sync + Unpin + 'static,
{
    /// 캐시 키 접두사 (`user`, `dinner`, ...)
    const ENTITY: &'static str;

    /// MongoDB 컬렉션 이름
    const COLLECTION: &'static str;

    fn db(&self) -> &Database;

    fn redis(&self) -> &RedisClient;

    fn collection(&self) -> Collection<T> {
        self.db().get_database().collection::<T>(Self::COLLECTION)
    }

    fn cache_key(&self, id: &ObjectId) -> String {
        entity_key(Self::ENTITY, &id.to_hex())
    }

    /// `_id`로 조회합니다. 소프트 삭제된 문서도 반환합니다.
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<T>> {
        let cache_key = self.cache_key(id);

        match self.redis().get::<T>(&cache_key).await {
            Ok(Some(cached)) => {
                log::debug!("캐시 적중: {}", cache_key);
                return Ok(Some(cached));
            }
            Ok(None) => {}
            Err(e) => log::warn!("캐시 조회 실패 ({}): {}", cache_key, e),
        }

        let entity = self.collection().find_one(doc! { "_id": *id }).await?;

        if let Some(ref entity) = entity {
            if let Err(e) = self
                .redis()
                .set_with_expiry(&cache_key, entity, CacheConfig::ttl_seconds())
                .await
            {
                log::warn!("캐시 저장 실패 ({}): {}", cache_key, e);
            }
        }

        Ok(entity)
    }

    async fn find_one_by(&self, spec: &Specification<T>) -> AppResult<Option<T>> {
        Ok(self.collection().find_one(spec.to_filter()).await?)
    }

    async fn find_by_spec(&self, spec: &Specification<T>, options: QueryOptions) -> AppResult<Vec<T>> {
        let collection = self.collection();
        let mut action = collection.find(spec.to_filter());

        if let Some(sort) = options.sort {
            action = action.sort(sort);
        }
        if let Some(skip) = options.skip {
            action = action.skip(skip);
        }
        if let Some(limit) = options.limit {
            action = action.limit(limit);
        }

        let cursor = action.await?;
        let items: Vec<T> = cursor.try_collect().await?;
        Ok(items)
    }

    /// 삭제되지 않은 전체 목록 (생성 순)
    async fn find_all_active(&self) -> AppResult<Vec<T>> {
        let options = QueryOptions::sorted_by("audit.created_at");
        self.find_by_spec(&not_deleted(), options).await
    }

    async fn count_by_spec(&self, spec: &Specification<T>) -> AppResult<u64> {
        Ok(self.collection().count_documents(spec.to_filter()).await?)
    }

    fn stage_insert(&self, uow: &mut UnitOfWork, entity: &T) -> AppResult<()> {
        uow.register_insert(Self::COLLECTION, entity)
    }

    fn stage_update(&self, uow: &mut UnitOfWork, entity: &T) -> AppResult<()> {
        let id = entity.id();
        uow.register_update(Self::COLLECTION, id, entity.audit().version, entity, self.cache_key(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_options() {
        let options = QueryOptions::sorted_by("name").page(3, 10);

        assert_eq!(options.sort, Some(doc! { "name": 1 }));
        assert_eq!(options.skip, Some(20));
        assert_eq!(options.limit, Some(10));
    }

    #[test]
    fn test_first_page_has_no_offset() {
        let options = QueryOptions::default().page(1, 25);

        assert_eq!(options.skip, Some(0));
        assert_eq!(options.limit, Some(25));
        assert!(options.sort.is_none());
    }
}
