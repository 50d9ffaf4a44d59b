use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::dto::common::AuditResponse;
use crate::domain::entities::events::{Event, ScheduledEvent};
use crate::utils::time_utils::to_utc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    pub id: String,
    pub name: String,
    pub audit: AuditResponse,
}

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.to_hex(),
            name: event.name.clone(),
            audit: AuditResponse::from(&event.audit),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledEventResponse {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub date: NaiveDate,
    pub starts_at: DateTime<Utc>,
    pub end_time: NaiveTime,
    pub is_all_day: bool,
    pub dinner_id: Option<String>,
    pub audit: AuditResponse,
}

impl From<&ScheduledEvent> for ScheduledEventResponse {
    fn from(scheduled: &ScheduledEvent) -> Self {
        Self {
            id: scheduled.id.to_hex(),
            event_id: scheduled.event_id.to_hex(),
            name: scheduled.name.clone(),
            date: scheduled.date,
            starts_at: to_utc(scheduled.starts_at),
            end_time: scheduled.end_time,
            is_all_day: scheduled.is_all_day,
            dinner_id: scheduled.dinner_id.map(|id| id.to_hex()),
            audit: AuditResponse::from(&scheduled.audit),
        }
    }
}
