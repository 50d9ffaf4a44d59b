//! # Domain Entities Module
//!
//! MongoDB 문서와 1:1로 매핑되는 애그리거트들입니다.
//!
//! ```text
//! entities/
//! ├── base.rs       ← AuditInfo, EntityStatus, Auditable
//! ├── users/        ← User, UserRole
//! ├── events/       ← Event, ScheduledEvent
//! └── dinners/      ← Dinner, UserDinner, PaymentStatus
//! ```
//!
//! ## 공통 규칙
//!
//! - `_id`는 생성 시점에 클라이언트에서 발급합니다 (`ObjectId::new()`).
//!   덕분에 `UnitOfWork`에 등록된 엔티티를 커밋 전에도 참조할 수 있습니다.
//! - 모든 애그리거트는 `audit` 필드를 가지며 삭제는 소프트 삭제입니다.
//! - 삭제된 애그리거트에 대한 변경 메서드는 `ConflictError`를 반환합니다.
//! - 애그리거트 사이의 관계는 `ObjectId` 참조로만 표현합니다.

pub mod base;
pub mod dinners;
pub mod events;
pub mod users;

pub use base::{AuditInfo, Auditable, EntityStatus};
pub use dinners::{Dinner, PaymentStatus, UserDinner};
pub use events::{Event, Schedule, ScheduledEvent};
pub use users::{User, UserRole};
