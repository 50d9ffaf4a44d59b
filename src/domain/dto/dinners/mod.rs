pub mod request;
pub mod response;

pub use request::{AddParticipantRequest, DinnerRequest, UpdatePaymentStatusRequest, UpdatePresenceRequest};
pub use response::{DinnerResponse, ParticipantResponse};
