//! 디너와 참가 정보 리포지토리

pub mod dinner_repo;
pub mod user_dinner_repo;

pub use dinner_repo::DinnerRepository;
pub use user_dinner_repo::UserDinnerRepository;
