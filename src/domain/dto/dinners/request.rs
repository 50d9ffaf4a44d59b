use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::dinners::PaymentStatus;

/// 허용하는 최대 가격 (통화 단위)
pub const MAX_PRICE: f64 = 1_000_000_000.0;

/// 디너 생성/수정 요청. `price`는 통화 단위 소수 (`150.00`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DinnerRequest {
    #[validate(length(min = 1, max = 200, message = "디너 이름은 1~200자 사이여야 합니다"))]
    pub name: String,

    #[validate(range(min = 0.0, max = 1_000_000_000.0, message = "가격은 0 이상 1,000,000,000 이하여야 합니다"))]
    pub price: f64,
}

impl DinnerRequest {
    /// 센트 단위 정수로 반올림합니다.
    ///
    /// `validate()`를 거치지 않은 값도 들어올 수 있으므로 NaN, 무한대, 범위 밖 값은
    /// 포화 변환하지 않고 거부합니다.
    pub fn price_cents(&self) -> AppResult<i64> {
        if !self.price.is_finite() || !(0.0..=MAX_PRICE).contains(&self.price) {
            return Err(AppError::ValidationError(format!(
                "가격은 0 이상 {} 이하여야 합니다",
                MAX_PRICE
            )));
        }

        Ok((self.price * 100.0).round() as i64)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddParticipantRequest {
    #[validate(length(equal = 24, message = "유효하지 않은 사용자 ID입니다"))]
    pub user_id: String,

    #[serde(default)]
    pub is_present: bool,

    /// 생략 시 `Pending`
    #[serde(default)]
    pub payment_status: Option<String>,
}

impl AddParticipantRequest {
    pub fn payment_status(&self) -> AppResult<PaymentStatus> {
        match &self.payment_status {
            Some(raw) => Ok(PaymentStatus::parse(raw)?),
            None => Ok(PaymentStatus::default()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePresenceRequest {
    pub is_present: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePaymentStatusRequest {
    #[validate(length(min = 1, message = "결제 상태는 필수입니다"))]
    pub payment_status: String,
}

impl UpdatePaymentStatusRequest {
    pub fn payment_status(&self) -> AppResult<PaymentStatus> {
        Ok(PaymentStatus::parse(&self.payment_status)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_is_rounded_to_cents() {
        let req = DinnerRequest { name: "Jantar".into(), price: 149.99 };
        assert_eq!(req.price_cents().unwrap(), 14_999);

        let req = DinnerRequest { name: "Jantar".into(), price: 0.1 + 0.2 };
        assert_eq!(req.price_cents().unwrap(), 30);

        let req = DinnerRequest { name: "Jantar".into(), price: MAX_PRICE };
        assert_eq!(req.price_cents().unwrap(), 100_000_000_000);
    }

    #[test]
    fn test_out_of_range_price_is_rejected_instead_of_saturating() {
        for price in [1e300, f64::NAN, f64::INFINITY, -0.5, MAX_PRICE + 0.01] {
            let req = DinnerRequest { name: "Jantar".into(), price };
            assert!(
                matches!(req.price_cents(), Err(AppError::ValidationError(_))),
                "{}",
                price
            );
        }

        let req = DinnerRequest { name: "Jantar".into(), price: 1e300 };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_negative_price_fails_validation() {
        let req = DinnerRequest { name: "Jantar".into(), price: -1.0 };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_payment_status_defaults_to_pending() {
        let req: AddParticipantRequest =
            serde_json::from_str(r#"{"user_id": "65f1a2b3c4d5e6f708091a2b"}"#).unwrap();

        assert!(req.validate().is_ok());
        assert!(!req.is_present);
        assert_eq!(req.payment_status().unwrap(), PaymentStatus::Pending);
    }

    #[test]
    fn test_unknown_payment_status() {
        let req = UpdatePaymentStatusRequest { payment_status: "refunded".into() };
        assert!(req.payment_status().is_err());
    }
}
