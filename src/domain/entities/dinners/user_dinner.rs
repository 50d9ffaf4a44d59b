//! 사용자-디너 참가 연결

use std::fmt;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::base::{AuditInfo, Auditable, impl_auditable};
use crate::domain::services::user_dinner_domain_service::UserDinnerDomainService;
use crate::domain::value_objects::ValueObjectError;

/// 참가비 결제 상태
///
/// ```text
/// Pending ──▶ Paid ──▶ Canceled
///    └───────────────▶ Canceled   (종단)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Canceled,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Canceled => "Canceled",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ValueObjectError> {
        match raw.trim().to_lowercase().as_str() {
            "pending" => Ok(PaymentStatus::Pending),
            "paid" => Ok(PaymentStatus::Paid),
            "canceled" | "cancelled" => Ok(PaymentStatus::Canceled),
            _ => Err(ValueObjectError::new(
                "payment_status",
                format!("지원하지 않는 결제 상태입니다: {}", raw),
            )),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDinner {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: ObjectId,
    pub dinner_id: ObjectId,
    pub is_present: bool,
    pub payment_status: PaymentStatus,
    pub audit: AuditInfo,
}

impl_auditable!(UserDinner, "참가 정보");

impl UserDinner {
    pub fn new(
        user_id: ObjectId,
        dinner_id: ObjectId,
        is_present: bool,
        payment_status: PaymentStatus,
        created_by: Option<ObjectId>,
    ) -> Self {
        Self {
            id: ObjectId::new(),
            user_id,
            dinner_id,
            is_present,
            payment_status,
            audit: AuditInfo::new(created_by),
        }
    }

    pub fn mark_presence(&mut self, is_present: bool, modified_by: Option<ObjectId>) -> AppResult<()> {
        self.ensure_not_deleted()?;

        self.is_present = is_present;
        self.audit.record_modification(modified_by);
        Ok(())
    }

    /// 허용된 전이만 적용합니다. 같은 상태로의 변경도 거부됩니다.
    pub fn change_payment_status(&mut self, next: PaymentStatus, modified_by: Option<ObjectId>) -> AppResult<()> {
        self.ensure_not_deleted()?;

        if !UserDinnerDomainService::can_change_payment_status(self.payment_status, next) {
            return Err(AppError::ConflictError(format!(
                "결제 상태를 {}에서 {}(으)로 변경할 수 없습니다",
                self.payment_status, next
            )));
        }

        self.payment_status = next;
        self.audit.record_modification(modified_by);
        Ok(())
    }

    pub fn remove(&mut self, deleted_by: Option<ObjectId>) -> AppResult<()> {
        self.mark_deleted(deleted_by)
    }

    pub fn belongs_to(&self, dinner_id: &ObjectId) -> bool {
        &self.dinner_id == dinner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link() -> UserDinner {
        UserDinner::new(ObjectId::new(), ObjectId::new(), false, PaymentStatus::Pending, None)
    }

    #[test]
    fn test_payment_status_parse() {
        assert_eq!(PaymentStatus::parse("PAID").unwrap(), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::parse("cancelled").unwrap(), PaymentStatus::Canceled);
        assert!(PaymentStatus::parse("refunded").is_err());
    }

    #[test]
    fn test_pending_to_paid_to_canceled() {
        let mut link = link();

        link.change_payment_status(PaymentStatus::Paid, None).unwrap();
        link.change_payment_status(PaymentStatus::Canceled, None).unwrap();

        assert_eq!(link.payment_status, PaymentStatus::Canceled);
        assert!(link.audit.modified_at.is_some());
    }

    #[test]
    fn test_canceled_is_terminal() {
        let mut link = link();
        link.change_payment_status(PaymentStatus::Canceled, None).unwrap();

        let result = link.change_payment_status(PaymentStatus::Paid, None);
        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(link.payment_status, PaymentStatus::Canceled);
    }

    #[test]
    fn test_same_status_is_rejected() {
        let mut link = link();
        let result = link.change_payment_status(PaymentStatus::Pending, None);

        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert!(link.audit.modified_at.is_none());
    }

    #[test]
    fn test_removed_link_rejects_presence_change() {
        let mut link = link();
        link.remove(None).unwrap();

        assert!(matches!(link.mark_presence(true, None), Err(AppError::ConflictError(_))));
        assert!(!link.is_present);
    }
}
