//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 회원 가입 (관리자 토큰이 있으면 관리자 생성 가능) | 201 |
//! | `GET` | `/users` | 활성 사용자 목록 | 200 |
//! | `GET` | `/users/paged` | 이름/이메일 필터 + 페이지 | 200 |
//! | `GET` | `/users/{id}` | 단건 조회 | 200 |
//! | `PUT` | `/users/{id}` | 프로필 수정 (본인 또는 관리자) | 200 |
//! | `PUT` | `/users/{id}/password` | 비밀번호 변경 (본인 또는 관리자) | 204 |
//! | `DELETE` | `/users/{id}` | 소프트 삭제 (본인 또는 관리자) | 204 |
//!
//! 스코프는 선택적 인증으로 감싸져 있고, 인증이 필요한 핸들러는
//! `AuthenticatedUser` extractor를 받아 토큰이 없으면 401을 돌려줍니다.

use actix_web::{web, HttpResponse, get, post, put, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::users::{ChangePasswordRequest, CreateUserRequest, UpdateUserRequest, UserFilterQuery};
use crate::domain::models::auth::{AuthenticatedUser, OptionalUser};
use crate::services::users::UserService;

#[post("")]
pub async fn create_user(
    actor: OptionalUser,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = UserService::instance()
        .create_user(payload.into_inner(), actor.0.as_ref())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("")]
pub async fn list_users(_user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let users = UserService::instance().list_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// `/{user_id}`보다 먼저 등록해야 합니다.
#[get("/paged")]
pub async fn get_paged_users(
    _user: AuthenticatedUser,
    query: web::Query<UserFilterQuery>,
) -> Result<HttpResponse, AppError> {
    let page = UserService::instance()
        .get_paged_users(query.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(page))
}

#[get("/{user_id}")]
pub async fn get_user(
    _user: AuthenticatedUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = UserService::instance().get_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[put("/{user_id}")]
pub async fn update_user(
    user: AuthenticatedUser,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = UserService::instance()
        .update_user(&user_id, payload.into_inner(), &user)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[put("/{user_id}/password")]
pub async fn change_password(
    user: AuthenticatedUser,
    user_id: web::Path<String>,
    payload: web::Json<ChangePasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    UserService::instance()
        .change_password(&user_id, payload.into_inner(), &user)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

#[delete("/{user_id}")]
pub async fn delete_user(
    user: AuthenticatedUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    UserService::instance().delete_user(&user_id, &user).await?;
    Ok(HttpResponse::NoContent().finish())
}
