use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::base::{AuditInfo, Auditable, impl_auditable};
use crate::utils::string_utils::validate_required_string;

const DINNER_NAME_MAX_CHARS: usize = 200;

/// 디너. 가격은 센트 단위 정수로 저장합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dinner {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub price_cents: i64,
    pub audit: AuditInfo,
}

impl_auditable!(Dinner, "디너");

fn ensure_price(price_cents: i64) -> AppResult<i64> {
    if price_cents < 0 {
        return Err(AppError::ValidationError("가격은 0 이상이어야 합니다".to_string()));
    }
    Ok(price_cents)
}

impl Dinner {
    pub fn new(name: &str, price_cents: i64, created_by: Option<ObjectId>) -> AppResult<Self> {
        Ok(Self {
            id: ObjectId::new(),
            name: validate_required_string(name, "디너 이름", DINNER_NAME_MAX_CHARS)?,
            price_cents: ensure_price(price_cents)?,
            audit: AuditInfo::new(created_by),
        })
    }

    pub fn update(&mut self, name: &str, price_cents: i64, modified_by: Option<ObjectId>) -> AppResult<()> {
        self.ensure_not_deleted()?;

        self.name = validate_required_string(name, "디너 이름", DINNER_NAME_MAX_CHARS)?;
        self.price_cents = ensure_price(price_cents)?;
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

    #[test]
    fn test_new_dinner() {
        let dinner = Dinner::new(" Jantar de gala ", 15_000, None).unwrap();

        assert_eq!(dinner.name, "Jantar de gala");
        assert_eq!(dinner.price_cents, 15_000);
    }

    #[test]
    fn test_negative_price_is_rejected() {
        assert!(matches!(Dinner::new("Jantar", -1, None), Err(AppError::ValidationError(_))));

        let mut dinner = Dinner::new("Jantar", 0, None).unwrap();
        assert!(dinner.update("Jantar", -500, None).is_err());
        assert_eq!(dinner.price_cents, 0);
    }

    #[test]
    fn test_deleted_dinner_rejects_update() {
        let mut dinner = Dinner::new("Jantar", 100, None).unwrap();
        dinner.delete(None).unwrap();

        assert!(matches!(dinner.update("Novo", 200, None), Err(AppError::ConflictError(_))));
    }
}
