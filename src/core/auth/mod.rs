//! Authentication module for Voypost
//!
//! This module provides authentication functionality including:
//! - The identity provider gateway seam and the create-then-name sign-up intent
//! - Login, registration and logout flows that publish alerts
//! - Identity Toolkit wire types and provider settings
//! - REST endpoint exposing provider settings (server only)

#[cfg(feature = "ssr")]
pub mod api;
pub mod gateway;
pub mod identity;
pub mod service;
pub mod session;

#[cfg(feature = "ssr")]
pub use api::{AuthApiState, auth_api_router};
pub use gateway::{AuthGateway, DocumentCache, GatewayError, SignUpOutcome, sign_up};
pub use identity::{
    AccountResponse, DEFAULT_CACHE_PREFIX, DEFAULT_IDENTITY_ENDPOINT, IdentityMethod,
    PasswordRequest, ProfileUpdateRequest, ProviderSettings, parse_error_body,
};
pub use service::{
    LOGIN_SUCCESS, LOGOUT_SUCCESS, REGISTRATION_SUCCESS, SubmissionReport, authenticate, logout,
    run_submission, submit, unnamed_account_notice,
};
pub use session::{Session, User};
