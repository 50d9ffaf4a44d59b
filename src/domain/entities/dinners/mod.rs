pub mod dinner;
pub mod user_dinner;

pub use dinner::Dinner;
pub use user_dinner::{PaymentStatus, UserDinner};
