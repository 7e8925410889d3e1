//! Authentication UI module
//!
//! This module provides authentication-related components and context
//! for the Voypost frontend.

mod context;
mod login_form;
mod provider;
mod register_form;
mod user_menu;

pub use context::{AuthContext, AuthState, provide_auth_context, use_auth_context};
pub use login_form::LoginForm;
pub use provider::{IdentityToolkitGateway, LocalDocumentCache};
pub use register_form::RegisterForm;
pub use user_menu::{UserAvatar, UserMenu};
