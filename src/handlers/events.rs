//! # Event HTTP Handlers
//!
//! 이벤트와 그 일정(ScheduledEvent) 관리 엔드포인트입니다. 스코프 전체가 인증 필수입니다.

use actix_web::{web, HttpResponse, get, post, put, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::events::{EventRequest, ScheduledEventRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::events::EventService;

#[post("")]
pub async fn create_event(
    user: AuthenticatedUser,
    payload: web::Json<EventRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = EventService::instance()
        .create_event(payload.into_inner(), &user)
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("")]
pub async fn list_events() -> Result<HttpResponse, AppError> {
    let events = EventService::instance().list_events().await?;
    Ok(HttpResponse::Ok().json(events))
}

#[get("/{event_id}")]
pub async fn get_event(event_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let response = EventService::instance().get_event(&event_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[put("/{event_id}")]
pub async fn update_event(
    user: AuthenticatedUser,
    event_id: web::Path<String>,
    payload: web::Json<EventRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = EventService::instance()
        .update_event(&event_id, payload.into_inner(), &user)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 이벤트와 그 일정들을 함께 소프트 삭제합니다.
#[delete("/{event_id}")]
pub async fn delete_event(
    user: AuthenticatedUser,
    event_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    EventService::instance().delete_event(&event_id, &user).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/{event_id}/schedules")]
pub async fn add_scheduled_event(
    user: AuthenticatedUser,
    event_id: web::Path<String>,
    payload: web::Json<ScheduledEventRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = EventService::instance()
        .add_scheduled_event(&event_id, payload.into_inner(), &user)
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("/{event_id}/schedules")]
pub async fn list_scheduled_events(event_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let schedules = EventService::instance().list_scheduled_events(&event_id).await?;
    Ok(HttpResponse::Ok().json(schedules))
}

#[put("/{event_id}/schedules/{schedule_id}")]
pub async fn update_scheduled_event(
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
    payload: web::Json<ScheduledEventRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    let (event_id, schedule_id) = path.into_inner();

    let response = EventService::instance()
        .update_scheduled_event(&event_id, &schedule_id, payload.into_inner(), &user)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[delete("/{event_id}/schedules/{schedule_id}")]
pub async fn delete_scheduled_event(
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (event_id, schedule_id) = path.into_inner();

    EventService::instance()
        .delete_scheduled_event(&event_id, &schedule_id, &user)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
