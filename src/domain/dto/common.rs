//! 여러 리소스가 공유하는 응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::base::{AuditInfo, EntityStatus};
use crate::utils::time_utils::{to_utc, to_utc_opt};

/// 페이지 조회 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub current_page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, current_page: u64, page_size: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_count.div_ceil(page_size)
        };

        Self {
            items,
            total_count,
            current_page,
            page_size,
            total_pages,
        }
    }
}

/// 응답에 포함되는 감사 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResponse {
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&AuditInfo> for AuditResponse {
    fn from(audit: &AuditInfo) -> Self {
        Self {
            status: audit.status,
            created_at: to_utc(audit.created_at),
            created_by: audit.created_by.map(|id| id.to_hex()),
            modified_at: to_utc_opt(audit.modified_at),
            modified_by: audit.modified_by.map(|id| id.to_hex()),
            deleted_at: to_utc_opt(audit.deleted_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let page = PagedResult::new(vec![1, 2, 3], 21, 3, 10);

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 3);
    }

    #[test]
    fn test_empty_result_has_no_pages() {
        let page: PagedResult<i32> = PagedResult::new(vec![], 0, 1, 10);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_audit_response_omits_empty_fields() {
        let audit = AuditInfo::new(None);
        let json = serde_json::to_value(AuditResponse::from(&audit)).unwrap();

        assert_eq!(json["status"], "Active");
        assert!(json.get("modified_at").is_none());
        assert!(json.get("deleted_at").is_none());
    }
}
