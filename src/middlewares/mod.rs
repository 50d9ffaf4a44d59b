//! 미들웨어 모듈
//!
//! # 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 검증
//! - 사용자 정보(`AuthenticatedUser`)를 request extension에 저장
//! - 선택적/강제 인증 모드, 역할 요구 사항 지원
//!
//! ```rust,ignore
//! App::new()
//!     .service(
//!         web::scope("/api/v1/dinners")
//!             .wrap(AuthMiddleware::required())
//!             .route("", web::get().to(list_dinners))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
