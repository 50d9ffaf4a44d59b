pub mod request;
pub mod response;

pub use request::{EventRequest, ScheduledEventRequest};
pub use response::{EventResponse, ScheduledEventResponse};
