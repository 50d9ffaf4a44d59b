//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 `#[repository]` 매크로로 컨테이너에 등록되는 싱글톤이며,
//! 공통 조회 기능은 [`BaseRepository`](base::BaseRepository)가 제공합니다.
//! MongoDB를 주 저장소로 사용하고 단건 조회는 Redis로 캐싱합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::{base::BaseRepository, dinners::DinnerRepository};
//!
//! let dinner_repo = DinnerRepository::instance();
//! let dinner = dinner_repo.find_by_id(&dinner_id).await?;
//! ```

pub mod base;
pub mod dinners;
pub mod events;
pub mod users;

use crate::core::errors::AppResult;
use crate::utils::display_terminal::print_sub_task;

/// 모든 컬렉션의 인덱스를 생성합니다.
///
/// `ServiceLocator::initialize_all()` 이후, 서버가 요청을 받기 전에 호출합니다.
pub async fn create_all_indexes() -> AppResult<()> {
    users::UserRepository::instance().create_indexes().await?;
    print_sub_task("users", "✓ Indexes");

    events::EventRepository::instance().create_indexes().await?;
    events::ScheduledEventRepository::instance().create_indexes().await?;
    print_sub_task("events", "✓ Indexes");

    dinners::DinnerRepository::instance().create_indexes().await?;
    dinners::UserDinnerRepository::instance().create_indexes().await?;
    print_sub_task("dinners", "✓ Indexes");

    Ok(())
}
