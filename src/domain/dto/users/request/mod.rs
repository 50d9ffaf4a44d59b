pub mod change_password;
pub mod create_user;
pub mod login;
pub mod update_user;
pub mod user_filter;

pub use change_password::ChangePasswordRequest;
pub use create_user::CreateUserRequest;
pub use login::LoginRequest;
pub use update_user::UpdateUserRequest;
pub use user_filter::UserFilterQuery;
