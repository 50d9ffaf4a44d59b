use serde::{Deserialize, Serialize};
use validator::Validate;

/// 사용자 정보 수정 요청
///
/// 이메일은 식별자이므로 변경할 수 없습니다. 현재 값과 다른 이메일을 보내면 409를 반환합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, max = 100, message = "이름은 3~100자 사이여야 합니다"))]
    pub name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 10, max = 25, message = "전화번호 형식이 올바르지 않습니다"))]
    pub phone_number: String,

    #[validate(length(min = 11, max = 14, message = "CPF 형식이 올바르지 않습니다"))]
    pub cpf: String,

    /// 생략하면 기존 권한을 유지합니다.
    #[serde(default)]
    pub role: Option<String>,
}
