//! # Application Error Handling System
//!
//! 서비스 전체에서 사용하는 단일 에러 타입입니다.
//! 모든 계층(도메인, 리포지토리, 유스케이스, 핸들러)의 실패는 [`AppError`]로 모이고,
//! `actix_web::ResponseError` 구현을 통해 HTTP 상태 코드와 JSON 응답으로 변환됩니다.
//!
//! ## 상태 코드 매핑
//!
//! | 변형 | HTTP | 발생 예 |
//! |------|------|---------|
//! | `ValidationError` | 400 | 잘못된 CPF, 이메일 형식 오류, 잘못된 ID |
//! | `AuthenticationError` | 401 | 잘못된 자격 증명, 토큰 누락/만료 |
//! | `AuthorizationError` | 403 | 관리자 전용 작업 |
//! | `NotFound` | 404 | 존재하지 않는 사용자/이벤트/디너 |
//! | `ConflictError` | 409 | 중복 이메일/CPF, 허용되지 않는 상태 전이 |
//! | 그 외 | 500 | MongoDB, Redis, 내부 오류 |
//!
//! 응답 본문은 항상 `{"error": "<메시지>"}` 형태입니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let user = self.user_repo
//!     .find_by_id(id)
//!     .await?
//!     .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;
//! ```

use actix_web::{HttpRequest, error::{JsonPayloadError, PathError, QueryPayloadError}};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Redis error: {0}")]
    RedisError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict error: {0}")]
    ConflictError(String),

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

/// 잘못된 JSON 본문을 400 응답으로 바꿉니다.
///
/// `web::JsonConfig::default().error_handler(json_error_handler)`로 등록합니다.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err)).into()
}

/// 쿼리 문자열 역직렬화 실패를 JSON 400 응답으로 바꿉니다.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(format!("잘못된 쿼리 파라미터입니다: {}", err)).into()
}

/// 경로 파라미터 역직렬화 실패를 JSON 400 응답으로 바꿉니다.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(format!("잘못된 경로 파라미터입니다: {}", err)).into()
}

pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러에 문맥을 덧붙여 [`AppError::InternalError`]로 변환하는 확장 trait
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_code_mapping() {
        let cases = [
            (AppError::ValidationError("CPF inválido".into()), StatusCode::BAD_REQUEST),
            (AppError::AuthenticationError("bad credentials".into()), StatusCode::UNAUTHORIZED),
            (AppError::AuthorizationError("admin only".into()), StatusCode::FORBIDDEN),
            (AppError::NotFound("dinner".into()), StatusCode::NOT_FOUND),
            (AppError::ConflictError("duplicate email".into()), StatusCode::CONFLICT),
            (AppError::DatabaseError("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::RedisError("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::InternalError("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.error_response().status(), expected, "{}", error);
        }
    }

    #[actix_web::test]
    async fn test_error_body_is_json_with_message() {
        let response = AppError::ConflictError("이미 등록된 이메일입니다".into()).error_response();
        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "Conflict error: 이미 등록된 이메일입니다");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
