use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::errors::AppResult;
use crate::domain::entities::events::Schedule;
use crate::utils::string_utils::{clean_optional_string, parse_object_id};
use crate::utils::time_utils::from_utc;

/// 이벤트 생성/수정 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EventRequest {
    #[validate(length(min = 1, max = 200, message = "이벤트 이름은 1~200자 사이여야 합니다"))]
    pub name: String,
}

/// 이벤트 일정 생성/수정 요청
///
/// ```json
/// {
///   "name": "Jantar de abertura",
///   "date": "2025-11-20",
///   "starts_at": "2025-11-20T22:00:00Z",
///   "end_time": "23:30:00",
///   "is_all_day": false,
///   "dinner_id": "65f1a2b3c4d5e6f708091a2b"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScheduledEventRequest {
    #[validate(length(min = 1, max = 200, message = "일정 이름은 1~200자 사이여야 합니다"))]
    pub name: String,
    pub date: NaiveDate,
    pub starts_at: DateTime<Utc>,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub is_all_day: bool,
    #[serde(default)]
    pub dinner_id: Option<String>,
}

impl ScheduledEventRequest {
    /// 빈 `dinner_id`는 연결 없음으로 취급합니다.
    pub fn to_schedule(&self) -> AppResult<Schedule> {
        let dinner_id = clean_optional_string(self.dinner_id.clone())
            .map(|raw| parse_object_id(&raw))
            .transpose()?;

        Ok(Schedule {
            name: self.name.clone(),
            date: self.date,
            starts_at: from_utc(self.starts_at),
            end_time: self.end_time,
            is_all_day: self.is_all_day,
            dinner_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    fn request(dinner_id: Option<&str>) -> ScheduledEventRequest {
        serde_json::from_value(serde_json::json!({
            "name": "Jantar de abertura",
            "date": "2025-11-20",
            "starts_at": "2025-11-20T22:00:00Z",
            "end_time": "23:30:00",
            "dinner_id": dinner_id
        }))
        .unwrap()
    }

    #[test]
    fn test_to_schedule_parses_dinner_id() {
        let dinner_id = mongodb::bson::oid::ObjectId::new();
        let schedule = request(Some(&dinner_id.to_hex())).to_schedule().unwrap();

        assert_eq!(schedule.dinner_id, Some(dinner_id));
        assert!(!schedule.is_all_day);
        assert_eq!(schedule.starts_at.timestamp_millis(), 1_763_676_000_000);
    }

    #[test]
    fn test_blank_dinner_id_means_no_link() {
        assert_eq!(request(Some("  ")).to_schedule().unwrap().dinner_id, None);
        assert_eq!(request(None).to_schedule().unwrap().dinner_id, None);
    }

    #[test]
    fn test_invalid_dinner_id() {
        assert!(matches!(
            request(Some("jantar")).to_schedule(),
            Err(AppError::ValidationError(_))
        ));
    }
}
