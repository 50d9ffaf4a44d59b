//! 이벤트 관련 유스케이스

pub mod event_service;

pub use event_service::EventService;
