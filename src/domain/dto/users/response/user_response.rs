use serde::{Deserialize, Serialize};
use crate::domain::dto::common::AuditResponse;
use crate::domain::entities::users::{User, UserRole};

/// 사용자 응답. 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub cpf: String,
    pub role: UserRole,
    pub audit: AuditResponse,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string(),
            name: user.name.clone(),
            email: user.email.as_str().to_string(),
            phone_number: user.phone_number.as_str().to_string(),
            cpf: user.cpf.formatted(),
            role: user.role,
            audit: AuditResponse::from(&user.audit),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl LoginResponse {
    /// `expires_in`은 초 단위
    pub fn new(user: &User, access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user: UserResponse::from(user),
        }
    }
}
