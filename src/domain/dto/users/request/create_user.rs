//! # 사용자 가입 요청 DTO
//!
//! 형식 검증만 담당합니다. CPF 체크 디지트, 전화번호 정규화, 이메일/CPF 중복 확인은
//! 값 객체와 `UserService`에서 처리합니다.
//!
//! ```json
//! {
//!   "name": "Maria Souza",
//!   "email": "maria@sni.org",
//!   "password": "segredo123",
//!   "password_confirm": "segredo123",
//!   "phone_number": "(11) 98765-4321",
//!   "cpf": "529.982.247-25"
//! }
//! ```
//!
//! `role`을 생략하면 `User`입니다. `Admin` 계정은 관리자만 만들 수 있습니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_passwords_match"))]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 100, message = "이름은 3~100자 사이여야 합니다"))]
    pub name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 6, max = 72, message = "비밀번호는 6~72자 사이여야 합니다"))]
    pub password: String,

    pub password_confirm: String,

    #[validate(length(min = 10, max = 25, message = "전화번호 형식이 올바르지 않습니다"))]
    pub phone_number: String,

    #[validate(length(min = 11, max = 14, message = "CPF 형식이 올바르지 않습니다"))]
    pub cpf: String,

    #[serde(default)]
    pub role: Option<String>,
}

fn validate_passwords_match(req: &CreateUserRequest) -> Result<(), ValidationError> {
    if req.password != req.password_confirm {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("비밀번호가 일치하지 않습니다".into()));
    }
    Ok(())
}
