//! # Value Objects
//!
//! 원시 문자열을 감싸는 자기 검증 타입들입니다.
//! 생성자(`parse`, `hash`)는 정규화된 유효한 인스턴스를 만들거나 [`ValueObjectError`]를 반환하며,
//! 잘못된 상태의 인스턴스를 만들 방법은 없습니다. serde 역직렬화도 같은 생성자를 거칩니다.

pub mod cpf;
pub mod email;
pub mod password;
pub mod phone_number;

pub use cpf::Cpf;
pub use email::Email;
pub use password::Password;
pub use phone_number::PhoneNumber;

use thiserror::Error;
use crate::core::errors::AppError;

/// 값 객체 검증 실패. 문제가 된 필드 이름을 포함합니다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValueObjectError {
    pub field: &'static str,
    pub message: String,
}

impl ValueObjectError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl From<ValueObjectError> for AppError {
    fn from(error: ValueObjectError) -> Self {
        AppError::ValidationError(error.to_string())
    }
}
