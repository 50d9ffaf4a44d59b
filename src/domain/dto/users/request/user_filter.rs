//! 사용자 페이지 조회 쿼리 파라미터
//!
//! `GET /api/v1/users/paged?name=mar&email=sni.org&page_number=2&page_size=20`

use serde::{Deserialize, Serialize};
use crate::utils::string_utils::deserialize_optional_string;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserFilterQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    pub page_number: Option<u64>,

    pub page_size: Option<u64>,
}

impl UserFilterQuery {
    /// 1 미만이거나 생략된 경우 1
    pub fn page_number(&self) -> u64 {
        self.page_number.unwrap_or(1).max(1)
    }

    /// 생략 시 10, 범위는 1..=100으로 보정
    pub fn page_size(&self) -> u64 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = UserFilterQuery::default();

        assert_eq!(query.page_number(), 1);
        assert_eq!(query.page_size(), 10);
    }

    #[test]
    fn test_bounds_are_clamped() {
        let query = UserFilterQuery {
            page_number: Some(0),
            page_size: Some(500),
            ..Default::default()
        };

        assert_eq!(query.page_number(), 1);
        assert_eq!(query.page_size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_blank_filters_are_dropped() {
        let query: UserFilterQuery = serde_json::from_str(r#"{"name": "  ", "email": " sni.org "}"#).unwrap();

        assert_eq!(query.name, None);
        assert_eq!(query.email.as_deref(), Some("sni.org"));
    }
}
