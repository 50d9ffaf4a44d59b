use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_new_password_confirmed"))]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "현재 비밀번호는 필수입니다"))]
    pub current_password: String,

    #[validate(length(min = 6, max = 72, message = "비밀번호는 6~72자 사이여야 합니다"))]
    pub new_password: String,

    pub new_password_confirm: String,
}

fn validate_new_password_confirmed(req: &ChangePasswordRequest) -> Result<(), ValidationError> {
    if req.new_password != req.new_password_confirm {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("새 비밀번호가 일치하지 않습니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_must_match() {
        let req = ChangePasswordRequest {
            current_password: "segredo123".into(),
            new_password: "novasenha1".into(),
            new_password_confirm: "novasenha2".into(),
        };
        assert!(req.validate().is_err());

        let req = ChangePasswordRequest {
            new_password_confirm: "novasenha1".into(),
            ..req
        };
        assert!(req.validate().is_ok());
    }
}
