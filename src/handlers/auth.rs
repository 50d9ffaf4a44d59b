//! Authentication HTTP Handlers
//!
//! 이메일/비밀번호 로그인과 현재 사용자 조회를 처리합니다.
//! 발급되는 토큰은 HS256 액세스 토큰 하나이며 리프레시 토큰은 없습니다.
//!
//! - `POST /api/v1/auth/login` - 로그인, `{access_token, token_type, expires_in, user}`
//! - `GET /api/v1/auth/me` - 토큰 주체의 최신 정보
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::users::LoginRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::users::UserService;

/// 로컬 로그인 핸들러
///
/// 실패 사유(이메일 없음, 비밀번호 불일치)는 구분하지 않고 401로 응답합니다.
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = UserService::instance()
        .login(payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/me")]
pub async fn me(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let response = UserService::instance().get_current_user(&user).await?;
    Ok(HttpResponse::Ok().json(response))
}
