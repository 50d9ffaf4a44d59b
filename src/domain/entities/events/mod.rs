pub mod event;
pub mod scheduled_event;

pub use event::Event;
pub use scheduled_event::{Schedule, ScheduledEvent};
