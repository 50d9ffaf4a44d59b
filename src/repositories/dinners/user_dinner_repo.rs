//! # 참가 정보 리포지토리
//!
//! `user_dinners` 컬렉션. 한 사용자와 한 디너 사이에는 활성 연결이 최대 하나만 존재합니다.
//! 이 제약은 부분 유니크 인덱스(`audit.status = "Active"`)로 저장소에서도 강제되므로,
//! 동시에 같은 등록 요청이 들어와도 하나는 커밋 시점에 409로 실패합니다.

use std::sync::Arc;
use mongodb::{IndexModel, bson::{doc, oid::ObjectId}, options::IndexOptions};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::{errors::AppError, registry::Repository},
    db::Database,
    domain::entities::base::EntityStatus,
    domain::entities::dinners::UserDinner,
    domain::specifications::{active_link_between, participants_of_dinner},
    repositories::base::{BaseRepository, QueryOptions},
};

#[repository(name = "user_dinner", collection = "user_dinners")]
pub struct UserDinnerRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl UserDinnerRepository {
    pub async fn find_active_link(&self, user_id: ObjectId, dinner_id: ObjectId) -> Result<Option<UserDinner>, AppError> {
        self.find_one_by(&active_link_between(user_id, dinner_id)).await
    }

    /// 디너의 삭제되지 않은 참가 정보 (등록 순)
    pub async fn find_by_dinner(&self, dinner_id: ObjectId) -> Result<Vec<UserDinner>, AppError> {
        self.find_by_spec(&participants_of_dinner(dinner_id), QueryOptions::sorted_by("audit.created_at"))
            .await
    }

    /// 컬렉션 인덱스를 생성합니다. 이미 있으면 그대로 둡니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let active_link_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "dinner_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .partial_filter_expression(doc! { "audit.status": EntityStatus::Active.as_str() })
                .name("active_link_unique".to_string())
                .build())
            .build();

        let dinner_index = IndexModel::builder()
            .keys(doc! { "dinner_id": 1 })
            .options(IndexOptions::builder()
                .name("dinner_id".to_string())
                .build())
            .build();

        self.collection::<UserDinner>()
            .create_indexes([active_link_index, dinner_index])
            .await?;

        Ok(())
    }
}

impl BaseRepository<UserDinner> for UserDinnerRepository {
    const ENTITY: &'static str = "user_dinner";
    const COLLECTION: &'static str = "user_dinners";

    fn db(&self) -> &Database {
        &self.db
    }

    fn redis(&self) -> &RedisClient {
        &self.redis
    }
}
