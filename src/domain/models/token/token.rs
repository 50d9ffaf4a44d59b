use serde::{Deserialize, Serialize};
use crate::domain::entities::users::UserRole;

/// 액세스 토큰(HS256) 클레임
///
/// `iss`, `aud`, `exp`는 매 요청마다 검증됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID (ObjectId 16진수)
    pub sub: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
    /// 토큰 고유 ID
    pub jti: String,
}
