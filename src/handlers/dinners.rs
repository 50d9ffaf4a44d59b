//! # Dinner HTTP Handlers
//!
//! 디너 CRUD와 참가자 관리 엔드포인트입니다. 스코프 전체가 인증 필수입니다.
//!
//! 참가자 경로의 `{participant_id}`는 UserDinner 자체의 ID입니다.

use actix_web::{web, HttpResponse, get, post, put, patch, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::dinners::{AddParticipantRequest, DinnerRequest, UpdatePaymentStatusRequest, UpdatePresenceRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::dinners::DinnerService;

#[post("")]
pub async fn create_dinner(
    user: AuthenticatedUser,
    payload: web::Json<DinnerRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = DinnerService::instance()
        .create_dinner(payload.into_inner(), &user)
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("")]
pub async fn list_dinners() -> Result<HttpResponse, AppError> {
    let dinners = DinnerService::instance().list_dinners().await?;
    Ok(HttpResponse::Ok().json(dinners))
}

#[get("/{dinner_id}")]
pub async fn get_dinner(dinner_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let response = DinnerService::instance().get_dinner(&dinner_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[put("/{dinner_id}")]
pub async fn update_dinner(
    user: AuthenticatedUser,
    dinner_id: web::Path<String>,
    payload: web::Json<DinnerRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = DinnerService::instance()
        .update_dinner(&dinner_id, payload.into_inner(), &user)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[delete("/{dinner_id}")]
pub async fn delete_dinner(
    user: AuthenticatedUser,
    dinner_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    DinnerService::instance().delete_dinner(&dinner_id, &user).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/{dinner_id}/participants")]
pub async fn add_participant(
    user: AuthenticatedUser,
    dinner_id: web::Path<String>,
    payload: web::Json<AddParticipantRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = DinnerService::instance()
        .add_user_to_dinner(&dinner_id, payload.into_inner(), &user)
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("/{dinner_id}/participants")]
pub async fn list_participants(dinner_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let participants = DinnerService::instance().list_participants(&dinner_id).await?;
    Ok(HttpResponse::Ok().json(participants))
}

#[patch("/{dinner_id}/participants/{participant_id}/presence")]
pub async fn update_presence(
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
    payload: web::Json<UpdatePresenceRequest>,
) -> Result<HttpResponse, AppError> {
    let (dinner_id, participant_id) = path.into_inner();

    let response = DinnerService::instance()
        .update_presence(&dinner_id, &participant_id, payload.into_inner(), &user)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[patch("/{dinner_id}/participants/{participant_id}/payment-status")]
pub async fn update_payment_status(
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
    payload: web::Json<UpdatePaymentStatusRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    let (dinner_id, participant_id) = path.into_inner();

    let response = DinnerService::instance()
        .update_payment_status(&dinner_id, &participant_id, payload.into_inner(), &user)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[delete("/{dinner_id}/participants/{participant_id}")]
pub async fn remove_participant(
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (dinner_id, participant_id) = path.into_inner();

    DinnerService::instance()
        .remove_participant(&dinner_id, &participant_id, &user)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
