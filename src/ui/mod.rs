pub mod alert;
pub mod auth;
pub mod common;
pub mod icon;
pub mod pages;

pub use alert::{AlertBanner, AlertContext, provide_alert_context, use_alert_context};
pub use icon::{Icon, icons};
