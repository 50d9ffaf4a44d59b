use serde::{Deserialize, Serialize};
use crate::domain::dto::common::AuditResponse;
use crate::domain::entities::dinners::{Dinner, PaymentStatus, UserDinner};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DinnerResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub price_cents: i64,
    pub audit: AuditResponse,
}

impl From<&Dinner> for DinnerResponse {
    fn from(dinner: &Dinner) -> Self {
        Self {
            id: dinner.id.to_hex(),
            name: dinner.name.clone(),
            price: dinner.price_cents as f64 / 100.0,
            price_cents: dinner.price_cents,
            audit: AuditResponse::from(&dinner.audit),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantResponse {
    pub id: String,
    pub user_id: String,
    pub dinner_id: String,
    pub is_present: bool,
    pub payment_status: PaymentStatus,
    pub audit: AuditResponse,
}

impl From<&UserDinner> for ParticipantResponse {
    fn from(link: &UserDinner) -> Self {
        Self {
            id: link.id.to_hex(),
            user_id: link.user_id.to_hex(),
            dinner_id: link.dinner_id.to_hex(),
            is_present: link.is_present,
            payment_status: link.payment_status,
            audit: AuditResponse::from(&link.audit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dinner_response_exposes_decimal_price() {
        let dinner = Dinner::new("Jantar de gala", 15_050, None).unwrap();
        let json = serde_json::to_value(DinnerResponse::from(&dinner)).unwrap();

        assert_eq!(json["price"], 150.5);
        assert_eq!(json["price_cents"], 15_050);
    }
}
