use chrono::{NaiveDate, NaiveTime};
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};
use crate::core::errors::AppResult;
use crate::domain::entities::base::{AuditInfo, Auditable, impl_auditable};
use crate::domain::entities::events::event::EVENT_NAME_MAX_CHARS;
use crate::utils::string_utils::validate_required_string;

/// 이벤트 일정의 시간 정보
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub name: String,
    pub date: NaiveDate,
    pub starts_at: DateTime,
    pub end_time: NaiveTime,
    pub is_all_day: bool,
    pub dinner_id: Option<ObjectId>,
}

/// 이벤트에 속한 개별 일정. 선택적으로 하나의 디너와 연결됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledEvent {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub event_id: ObjectId,
    pub name: String,
    pub date: NaiveDate,
    pub starts_at: DateTime,
    pub end_time: NaiveTime,
    pub is_all_day: bool,
    pub dinner_id: Option<ObjectId>,
    pub audit: AuditInfo,
}

impl_auditable!(ScheduledEvent, "일정");

impl ScheduledEvent {
    pub fn new(event_id: ObjectId, schedule: Schedule, created_by: Option<ObjectId>) -> AppResult<Self> {
        let name = validate_required_string(&schedule.name, "일정 이름", EVENT_NAME_MAX_CHARS)?;

        Ok(Self {
            id: ObjectId::new(),
            event_id,
            name,
            date: schedule.date,
            starts_at: schedule.starts_at,
            end_time: schedule.end_time,
            is_all_day: schedule.is_all_day,
            dinner_id: schedule.dinner_id,
            audit: AuditInfo::new(created_by),
        })
    }

    pub fn reschedule(&mut self, schedule: Schedule, modified_by: Option<ObjectId>) -> AppResult<()> {
        self.ensure_not_deleted()?;

        self.name = validate_required_string(&schedule.name, "일정 이름", EVENT_NAME_MAX_CHARS)?;
        self.date = schedule.date;
        self.starts_at = schedule.starts_at;
        self.end_time = schedule.end_time;
        self.is_all_day = schedule.is_all_day;
        self.dinner_id = schedule.dinner_id;
        self.audit.record_modification(modified_by);
        Ok(())
    }

    pub fn delete(&mut self, deleted_by: Option<ObjectId>) -> AppResult<()> {
        self.mark_deleted(deleted_by)
    }

    pub fn belongs_to(&self, event_id: &ObjectId) -> bool {
        &self.event_id == event_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(name: &str) -> Schedule {
        Schedule {
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(),
            starts_at: DateTime::from_millis(1_763_665_200_000),
            end_time: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            is_all_day: false,
            dinner_id: None,
        }
    }

    #[test]
    fn test_new_scheduled_event() {
        let event_id = ObjectId::new();
        let scheduled = ScheduledEvent::new(event_id, schedule(" Abertura "), None).unwrap();

        assert_eq!(scheduled.name, "Abertura");
        assert!(scheduled.belongs_to(&event_id));
        assert!(!scheduled.belongs_to(&ObjectId::new()));
    }

    #[test]
    fn test_reschedule_links_dinner() {
        let mut scheduled = ScheduledEvent::new(ObjectId::new(), schedule("Abertura"), None).unwrap();
        let dinner_id = ObjectId::new();

        let mut next = schedule("Jantar de abertura");
        next.dinner_id = Some(dinner_id);
        next.is_all_day = true;
        scheduled.reschedule(next, None).unwrap();

        assert_eq!(scheduled.dinner_id, Some(dinner_id));
        assert!(scheduled.is_all_day);
        assert!(scheduled.audit.modified_at.is_some());
    }
}
