use std::sync::Arc;
use mongodb::{IndexModel, bson::doc, options::IndexOptions};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::{errors::AppError, registry::Repository},
    db::Database,
    domain::entities::events::Event,
    repositories::base::BaseRepository,
};

/// `events` 컬렉션
#[repository(name = "event", collection = "events")]
pub struct EventRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl EventRepository {
    /// 컬렉션 인덱스를 생성합니다. 이미 있으면 그대로 둡니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let created_at_index = IndexModel::builder()
            .keys(doc! { "audit.created_at": 1 })
            .options(IndexOptions::builder()
                .name("created_at_asc".to_string())
                .build())
            .build();

        self.collection::<Event>().create_index(created_at_index).await?;
        Ok(())
    }
}

impl BaseRepository<Event> for EventRepository {
    const ENTITY: &'static str = "event";
    const COLLECTION: &'static str = "events";

    fn db(&self) -> &Database {
        &self.db
    }

    fn redis(&self) -> &RedisClient {
        &self.redis
    }
}
