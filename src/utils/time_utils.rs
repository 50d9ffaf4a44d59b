//! BSON 시간 타입과 API 응답용 chrono 타입 간 변환

use chrono::{DateTime, Utc};
use mongodb::bson;

/// 저장된 BSON 시각을 API 응답용 UTC 시각으로 변환합니다.
pub fn to_utc(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

/// 요청으로 받은 UTC 시각을 저장용 BSON 시각으로 변환합니다 (밀리초 정밀도).
pub fn from_utc(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

pub fn to_utc_opt(value: Option<bson::DateTime>) -> Option<DateTime<Utc>> {
    value.map(to_utc)
}
