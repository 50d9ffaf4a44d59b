//! 사용자 관련 유스케이스

pub mod user_service;

pub use user_service::UserService;
