//! 디너 관련 유스케이스

pub mod dinner_service;

pub use dinner_service::DinnerService;
