use std::sync::Arc;
use mongodb::{IndexModel, bson::{doc, oid::ObjectId}, options::IndexOptions};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::{errors::AppError, registry::Repository},
    db::Database,
    domain::entities::events::ScheduledEvent,
    domain::specifications::schedules_of_event,
    repositories::base::{BaseRepository, QueryOptions},
};

/// `scheduled_events` 컬렉션
#[repository(name = "scheduled_event", collection = "scheduled_events")]
pub struct ScheduledEventRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl ScheduledEventRepository {
    /// 이벤트의 삭제되지 않은 일정을 시작 시각 순으로 조회합니다.
    pub async fn find_by_event(&self, event_id: ObjectId) -> Result<Vec<ScheduledEvent>, AppError> {
        self.find_by_spec(&schedules_of_event(event_id), QueryOptions::sorted_by("starts_at"))
            .await
    }

    /// 컬렉션 인덱스를 생성합니다. 이미 있으면 그대로 둡니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let event_index = IndexModel::builder()
            .keys(doc! { "event_id": 1, "starts_at": 1 })
            .options(IndexOptions::builder()
                .name("event_starts_at".to_string())
                .build())
            .build();

        self.collection::<ScheduledEvent>().create_index(event_index).await?;
        Ok(())
    }
}

impl BaseRepository<ScheduledEvent> for ScheduledEventRepository {
    const ENTITY: &'static str = "scheduled_event";
    const COLLECTION: &'static str = "scheduled_events";

    fn db(&self) -> &Database {
        &self.db
    }

    fn redis(&self) -> &RedisClient {
        &self.redis
    }
}
