use mongodb::bson::{doc, oid::ObjectId};
use crate::domain::entities::events::ScheduledEvent;
use super::{Specification, not_deleted};

/// 이벤트에 속한, 삭제되지 않은 일정
pub fn schedules_of_event(event_id: ObjectId) -> Specification<ScheduledEvent> {
    Specification::new(
        doc! { "event_id": event_id },
        move |scheduled: &ScheduledEvent| scheduled.belongs_to(&event_id),
    )
    .and(not_deleted())
}
