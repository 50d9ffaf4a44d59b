//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use crate::core::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  Jantar  ", "name", 200).unwrap(), "Jantar");
/// assert!(validate_required_string("   ", "name", 200).is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str, max_chars: usize) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    if trimmed.chars().count() > max_chars {
        return Err(AppError::ValidationError(
            format!("{}은(는) 최대 {}자까지 입력할 수 있습니다", field_name, max_chars)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 쿼리 파라미터나 JSON 본문의 빈 문자열을 `None`으로 취급합니다.
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 사용합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 경로나 본문의 16진수 문자열을 `ObjectId`로 변환합니다.
pub fn parse_object_id(value: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(value.trim())
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 ID 형식입니다: {}", value)))
}

/// CamelCase 타입 이름을 snake_case로 변환합니다.
///
/// `UserDinnerRepository` → `user_dinner_repository`
pub fn to_snake_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 4);

    for (index, ch) in value.chars().enumerate() {
        if ch.is_uppercase() {
            if index > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("Hello", "name", 200).unwrap(), "Hello");
        assert_eq!(validate_required_string("  World  ", "name", 200).unwrap(), "World");

        assert!(validate_required_string("", "name", 200).is_err());
        assert!(validate_required_string("   ", "name", 200).is_err());
        assert!(validate_required_string("\t\n", "name", 200).is_err());
    }

    #[test]
    fn test_validate_required_string_length_limit() {
        let exactly = "a".repeat(200);
        let too_long = "a".repeat(201);

        assert!(validate_required_string(&exactly, "name", 200).is_ok());
        assert!(matches!(
            validate_required_string(&too_long, "name", 200),
            Err(AppError::ValidationError(_))
        ));
        // 앞뒤 공백은 길이 계산에서 제외
        assert!(validate_required_string(&format!("  {}  ", exactly), "name", 200).is_ok());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct Filter {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            name: Option<String>,
        }

        let filter: Filter = serde_json::from_str(r#"{"name": "  Ana  "}"#).unwrap();
        assert_eq!(filter.name.as_deref(), Some("Ana"));

        let filter: Filter = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert_eq!(filter.name, None);

        let filter: Filter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter.name, None);
    }

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();

        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
        assert!(matches!(parse_object_id("not-an-id"), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("UserService"), "user_service");
        assert_eq!(to_snake_case("ScheduledEventService"), "scheduled_event_service");
        assert_eq!(to_snake_case("user"), "user");
    }
}
