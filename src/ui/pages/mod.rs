//! Application pages module
//!
//! - Home screen (app bar with the user menu)
//! - Login page
//! - Register page
//! - Not found page

mod app_bar;
mod home;
mod login;
mod not_found;
mod register;
mod side_miniature;

pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
