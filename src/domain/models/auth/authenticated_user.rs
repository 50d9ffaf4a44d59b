//! # 인증된 사용자 컨텍스트
//!
//! `AuthMiddleware`가 토큰을 검증한 뒤 요청 extensions에 넣는 값입니다.
//! 핸들러에서는 extractor로 바로 받습니다.
//!
//! ```rust,ignore
//! async fn delete_dinner(user: AuthenticatedUser, path: web::Path<String>) -> Result<HttpResponse, AppError> {
//!     DinnerService::instance().delete_dinner(&path, &user).await?;
//!     Ok(HttpResponse::NoContent().finish())
//! }
//! ```

use std::future::{Ready, ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::UserRole;
use crate::domain::models::token::TokenClaims;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: ObjectId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    /// 감사 정보에 기록할 행위자
    pub fn actor_id(&self) -> Option<ObjectId> {
        Some(self.user_id)
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// 본인이거나 관리자가 아니면 403
    pub fn ensure_self_or_admin(&self, target: &ObjectId) -> AppResult<()> {
        if self.is_admin() || &self.user_id == target {
            return Ok(());
        }
        Err(AppError::AuthorizationError("본인 또는 관리자만 수행할 수 있습니다".to_string()))
    }
}

impl TryFrom<TokenClaims> for AuthenticatedUser {
    type Error = AppError;

    fn try_from(claims: TokenClaims) -> Result<Self, Self::Error> {
        let user_id = ObjectId::parse_str(&claims.sub)
            .map_err(|_| AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()))?;

        Ok(Self {
            user_id,
            name: claims.name,
            email: claims.email,
            role: claims.role,
        })
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string()
            ).into())),
        }
    }
}

/// 인증이 선택적인 라우트용 extractor
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}
