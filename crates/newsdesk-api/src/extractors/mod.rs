//! Custom request extractors.

pub mod auth;
pub mod json;
pub mod login;

pub use auth::AuthUser;
pub use json::JsonBody;
pub use login::LoginForm;
