//! 이벤트와 이벤트 일정 리포지토리

pub mod event_repo;
pub mod scheduled_event_repo;

pub use event_repo::EventRepository;
pub use scheduled_event_repo::ScheduledEventRepository;
