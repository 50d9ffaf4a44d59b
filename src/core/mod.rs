//! # Core Framework Module
//!
//! 서비스 전반이 의존하는 두 가지 기반 기능입니다.
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 타입별 싱글톤 보관, 지연 생성, 순환 참조 감지
//! - **자동 레지스트리**: `#[service]` / `#[repository]` 매크로가 만들어 `inventory`로 수집되는 등록 정보
//! - **수동 등록**: `Database`, `RedisClient` 같은 인프라는 `ServiceLocator::set`
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 (`thiserror`)
//! - **HTTP 통합**: `ResponseError` 구현으로 상태 코드와 `{"error": ...}` 본문 생성
//!
//! ## 새 서비스 추가
//!
//! ```rust,ignore
//! use singleton_macro::service;
//!
//! #[service(name = "report")]
//! pub struct ReportService {
//!     dinner_repo: Arc<DinnerRepository>,
//! }
//! ```
//!
//! ## 트러블슈팅
//!
//! ```text
//! panic: Circular dependency detected: UserService is already being initialized
//! ```
//! 서비스 간 의존이 단방향이 되도록 재구성합니다.
//!
//! ```text
//! panic: Service not found: ReportService. Make sure it's registered with #[service] or #[repository] macro, ...
//! ```
//! 매크로가 빠졌거나 `name`이 타입 이름(접미사 제외)의 snake_case와 다릅니다.
//! `ReportService`라면 `#[service(name = "report")]`여야 합니다.

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
