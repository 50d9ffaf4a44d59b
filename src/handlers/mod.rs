//! # HTTP Request Handlers Module
//!
//! 얇은 어댑터 계층입니다. 핸들러는 요청을 역직렬화하고 `validator`로 검증한 뒤
//! 서비스 싱글톤(`XxxService::instance()`)을 호출하고 결과를 JSON으로 돌려줍니다.
//!
//! ```text
//! Handlers (이 모듈)  ← Web Layer
//!   └─ Services       ← 유스케이스
//!        └─ Repositories / UnitOfWork
//! ```
//!
//! 에러는 모두 [`AppError`](crate::core::errors::AppError)로 반환되며
//! `ResponseError` 구현이 상태 코드와 `{"error": "..."}` 본문을 만듭니다.
//! 생성은 201, 삭제와 비밀번호 변경은 204입니다.

pub mod auth;
pub mod dinners;
pub mod events;
pub mod users;
