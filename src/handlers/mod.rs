mod auth;
mod extract;
pub mod employees;
pub mod todo;
pub mod weather;

pub use auth::{serve_login_page, handle_login, handle_logout, USER_SESSION};
