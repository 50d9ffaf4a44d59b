//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 요청/응답 구조체입니다.
//! 요청 DTO는 `validator::Validate`로 형식을 검증하고, 도메인 규칙(값 객체, 중복 확인)은
//! 서비스 계층에서 다시 검증합니다. 응답 DTO는 비밀번호 해시 같은 내부 값을 노출하지 않습니다.
//!
//! ```text
//! dto/
//! ├── common.rs   ← PagedResult, AuditResponse
//! ├── users/      ← 가입, 수정, 비밀번호 변경, 로그인, 목록 필터
//! ├── events/     ← 이벤트, 이벤트 일정
//! └── dinners/    ← 디너, 참가자
//! ```

pub mod common;
pub mod dinners;
pub mod events;
pub mod users;

pub use common::{AuditResponse, PagedResult};
