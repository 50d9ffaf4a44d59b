//! # Application Services
//!
//! 유스케이스 단위의 서비스들입니다. 모두 `#[service]` 매크로로 등록되는 싱글톤이며
//! 핸들러에서 `XxxService::instance()`로 가져옵니다.
//!
//! 변경 유스케이스는 다음 순서를 따릅니다.
//!
//! ```text
//! 로드 (리포지토리) → 도메인 메서드 호출 (검증 + audit 갱신)
//!   → UnitOfWork에 스테이징 → commit (실패 시 rollback)
//! ```

pub mod auth;
pub mod dinners;
pub mod events;
pub mod users;
