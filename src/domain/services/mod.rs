//! # Domain Services
//!
//! 하나의 애그리거트에 담기 어려운 규칙들입니다.
//!
//! - [`UserDinnerDomainService`]: 참가 등록과 결제 상태 전이에 대한 순수 판정 함수
//! - [`UserDomainService`]: 이메일/CPF 중복 확인 (리포지토리 조회 필요)

pub mod user_dinner_domain_service;
pub mod user_domain_service;

pub use user_dinner_domain_service::UserDinnerDomainService;
pub use user_domain_service::UserDomainService;
