//! # Domain Layer Module
//!
//! 비즈니스 규칙을 담는 계층입니다. HTTP나 MongoDB 세부 사항에 의존하지 않고,
//! 저장소 접근이 필요한 규칙(`UserDomainService`)만 리포지토리를 통해 조회합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── value_objects   - Email, Cpf, Password, PhoneNumber (자기 검증 타입)
//! ├── entities        - User, Event, ScheduledEvent, Dinner, UserDinner + AuditInfo
//! ├── services        - 애그리거트 사이의 규칙 (참가 등록, 결제 상태, 중복 확인)
//! ├── specifications  - 메모리 판정과 MongoDB 필터를 함께 가진 조건
//! ├── dto             - 요청/응답 계약
//! └── models          - 인증 컨텍스트, 토큰 클레임
//!      │
//!      ▼
//! Application Layer (services/)
//!      │
//!      ▼
//! Infrastructure Layer (repositories/, db/, caching/)
//! ```
//!
//! ## 불변식
//!
//! - 값 객체는 유효한 상태로만 존재합니다. 역직렬화도 같은 검증을 거칩니다.
//! - 애그리거트의 상태 변경은 메서드를 통해서만 이루어지며, 변경마다 `audit`이 갱신됩니다.
//! - 삭제는 소프트 삭제이고 `Deleted`는 종단 상태입니다.
//!
//! ## 사용자 등록 흐름
//!
//! ```rust,ignore
//! request.validate()?;                                   // DTO 형식 검증
//! let email = Email::parse(&request.email)?;             // 값 객체 검증
//! user_domain_service.ensure_email_available(&email, None).await?;
//! let user = User::new(&request.name, email, password, phone, cpf, UserRole::User, None)?;
//!
//! let mut uow = UnitOfWork::begin();
//! user_repo.stage_insert(&mut uow, &user)?;
//! uow.commit().await?;
//! ```

pub mod dto;
pub mod entities;
pub mod models;
pub mod services;
pub mod specifications;
pub mod value_objects;
