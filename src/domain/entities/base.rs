//! # 감사(Audit) 정보
//!
//! 모든 애그리거트가 `audit` 필드로 포함하는 생성/수정/삭제 기록과 상태입니다.
//!
//! ```text
//!   Active ──record_deletion──▶ Deleted  (종단 상태, 이후 변경은 409 Conflict)
//!
//!   Inactive  (저장소에 존재할 수 있는 상태, 이 서비스의 유스케이스는 만들지 않음)
//! ```
//!
//! 삭제는 Active에서만 가능합니다. 각 전이는 해당 타임스탬프를 한 번만 기록하며,
//! 이미 기록된 값을 소급해서 바꾸지 않습니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityStatus {
    Active,
    Inactive,
    Deleted,
}

impl EntityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityStatus::Active => "Active",
            EntityStatus::Inactive => "Inactive",
            EntityStatus::Deleted => "Deleted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditInfo {
    pub status: EntityStatus,
    pub created_at: DateTime,
    pub created_by: Option<ObjectId>,
    pub modified_at: Option<DateTime>,
    pub modified_by: Option<ObjectId>,
    pub deleted_at: Option<DateTime>,
    pub deleted_by: Option<ObjectId>,
    /// 낙관적 잠금 버전. 저장소에 교체될 때마다 `UnitOfWork`가 1씩 올립니다.
    #[serde(default)]
    pub version: i64,
}

impl AuditInfo {
    /// 생성 기록이 찍힌 새 감사 정보
    pub fn new(actor: Option<ObjectId>) -> Self {
        let mut audit = Self {
            status: EntityStatus::Active,
            created_at: DateTime::now(),
            created_by: None,
            modified_at: None,
            modified_by: None,
            deleted_at: None,
            deleted_by: None,
            version: 0,
        };
        audit.record_creation(actor);
        audit
    }

    pub fn record_creation(&mut self, actor: Option<ObjectId>) {
        self.created_at = DateTime::now();
        self.created_by = actor;
        self.status = EntityStatus::Active;
    }

    /// 수정 기록. 상태는 바꾸지 않습니다.
    pub fn record_modification(&mut self, actor: Option<ObjectId>) {
        self.modified_at = Some(DateTime::now());
        self.modified_by = actor;
    }

    /// Active → Deleted. Active가 아니면 아무 것도 기록하지 않고 `false`를 반환합니다.
    pub fn record_deletion(&mut self, actor: Option<ObjectId>) -> bool {
        if !self.is_active() {
            return false;
        }
        self.deleted_at = Some(DateTime::now());
        self.deleted_by = actor;
        self.status = EntityStatus::Deleted;
        true
    }

    pub fn is_deleted(&self) -> bool {
        self.status == EntityStatus::Deleted
    }

    pub fn is_active(&self) -> bool {
        self.status == EntityStatus::Active
    }
}

/// 감사 정보를 가진 애그리거트
pub trait Auditable {
    /// 에러 메시지에 쓰는 엔티티 표시 이름
    const LABEL: &'static str;

    /// 문서 `_id`
    fn id(&self) -> ObjectId;

    fn audit(&self) -> &AuditInfo;

    fn audit_mut(&mut self) -> &mut AuditInfo;

    fn is_deleted(&self) -> bool {
        self.audit().is_deleted()
    }

    /// 삭제된 엔티티에 대한 변경을 거부합니다.
    fn ensure_not_deleted(&self) -> AppResult<()> {
        if self.is_deleted() {
            return Err(AppError::ConflictError(format!("삭제된 {}은(는) 변경할 수 없습니다", Self::LABEL)));
        }
        Ok(())
    }

    /// 소프트 삭제. 삭제됐거나 Active가 아닌 엔티티는 409로 거부합니다.
    fn mark_deleted(&mut self, actor: Option<ObjectId>) -> AppResult<()> {
        self.ensure_not_deleted()?;
        if !self.audit_mut().record_deletion(actor) {
            return Err(AppError::ConflictError(format!("활성 상태가 아닌 {}은(는) 삭제할 수 없습니다", Self::LABEL)));
        }
        Ok(())
    }
}

/// `id`와 `audit` 필드를 가진 구조체에 [`Auditable`]을 구현합니다.
macro_rules! impl_auditable {
    ($ty:ty, $label:literal) => {
        impl $crate::domain::entities::base::Auditable for $ty {
            const LABEL: &'static str = $label;

            fn id(&self) -> ::mongodb::bson::oid::ObjectId {
                self.id
            }

            fn audit(&self) -> &$crate::domain::entities::base::AuditInfo {
                &self.audit
            }

            fn audit_mut(&mut self) -> &mut $crate::domain::entities::base::AuditInfo {
                &mut self.audit
            }
        }
    };
}

pub(crate) use impl_auditable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_sets_active_and_created_fields_only() {
        let actor = ObjectId::new();
        let audit = AuditInfo::new(Some(actor));

        assert_eq!(audit.status, EntityStatus::Active);
        assert_eq!(audit.created_by, Some(actor));
        assert!(audit.modified_at.is_none());
        assert!(audit.modified_by.is_none());
        assert!(audit.deleted_at.is_none());
        assert!(audit.deleted_by.is_none());
    }

    #[test]
    fn test_modification_keeps_status() {
        let mut audit = AuditInfo::new(None);
        let editor = ObjectId::new();

        audit.record_modification(Some(editor));

        assert_eq!(audit.status, EntityStatus::Active);
        assert!(audit.modified_at.is_some());
        assert_eq!(audit.modified_by, Some(editor));
        assert!(audit.deleted_at.is_none());
    }

    #[test]
    fn test_deletion_is_terminal_and_keeps_first_stamp() {
        let mut audit = AuditInfo::new(None);
        let first = ObjectId::new();
        let second = ObjectId::new();

        assert!(audit.record_deletion(Some(first)));
        let stamped_at = audit.deleted_at;

        assert!(!audit.record_deletion(Some(second)));
        assert_eq!(audit.status, EntityStatus::Deleted);
        assert_eq!(audit.deleted_by, Some(first));
        assert_eq!(audit.deleted_at, stamped_at);
    }

    #[test]
    fn test_deletion_only_from_active() {
        let mut audit = AuditInfo::new(None);
        audit.status = EntityStatus::Inactive;

        assert!(!audit.record_deletion(Some(ObjectId::new())));
        assert_eq!(audit.status, EntityStatus::Inactive);
        assert!(audit.deleted_at.is_none());
        assert!(audit.deleted_by.is_none());
    }

    #[test]
    fn test_mark_deleted_rejects_inactive_and_deleted() {
        struct Record {
            id: ObjectId,
            audit: AuditInfo,
        }
        impl_auditable!(Record, "레코드");

        let mut inactive = Record { id: ObjectId::new(), audit: AuditInfo::new(None) };
        inactive.audit.status = EntityStatus::Inactive;
        assert!(matches!(inactive.mark_deleted(None), Err(AppError::ConflictError(_))));

        let mut active = Record { id: ObjectId::new(), audit: AuditInfo::new(None) };
        active.mark_deleted(None).unwrap();
        assert!(active.is_deleted());
        assert!(matches!(active.mark_deleted(None), Err(AppError::ConflictError(_))));
    }

    #[test]
    fn test_legacy_document_without_version_reads_as_zero() {
        let mut document = mongodb::bson::to_document(&AuditInfo::new(None)).unwrap();
        document.remove("version");

        let audit: AuditInfo = mongodb::bson::from_document(document).unwrap();
        assert_eq!(audit.version, 0);
    }
}
