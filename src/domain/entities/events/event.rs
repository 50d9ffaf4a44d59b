use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::core::errors::AppResult;
use crate::domain::entities::base::{AuditInfo, Auditable, impl_auditable};
use crate::utils::string_utils::validate_required_string;

pub const EVENT_NAME_MAX_CHARS: usize = 200;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub audit: AuditInfo,
}

impl_auditable!(Event, "이벤트");

impl Event {
    pub fn new(name: &str, created_by: Option<ObjectId>) -> AppResult<Self> {
        Ok(Self {
            id: ObjectId::new(),
            name: validate_required_string(name, "이벤트 이름", EVENT_NAME_MAX_CHARS)?,
            audit: AuditInfo::new(created_by),
        })
    }

    pub fn rename(&mut self, name: &str, modified_by: Option<ObjectId>) -> AppResult<()> {
        self.ensure_not_deleted()?;

        self.name = validate_required_string(name, "이벤트 이름", EVENT_NAME_MAX_CHARS)?;
        self.audit.record_modification(modified_by);
        Ok(())
    }

    pub fn delete(&mut self, deleted_by: Option<ObjectId>) -> AppResult<()> {
        self.mark_deleted(deleted_by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    #[test]
    fn test_name_is_trimmed_and_bounded() {
        let event = Event::new("  Congresso Anual  ", None).unwrap();
        assert_eq!(event.name, "Congresso Anual");

        assert!(matches!(Event::new("   ", None), Err(AppError::ValidationError(_))));
        assert!(Event::new(&"x".repeat(201), None).is_err());
    }

    #[test]
    fn test_soft_delete_keeps_record_readable() {
        let mut event = Event::new("Congresso", None).unwrap();
        event.delete(None).unwrap();

        assert!(event.is_deleted());
        assert_eq!(event.name, "Congresso");
        assert!(matches!(event.rename("Outro", None), Err(AppError::ConflictError(_))));
    }
}
