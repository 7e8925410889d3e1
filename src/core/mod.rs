//! Core authentication-flow logic: validation, form lifecycle, alerts and the
//! identity provider seam

pub mod alert;
pub mod auth;
pub mod avatar;
#[cfg(feature = "ssr")]
pub mod config;
pub mod form;
pub mod validation;

pub use alert::{AlertRelay, AlertSink, AlertState, DEFAULT_ALERT_HIDE_MS, Severity};
pub use avatar::{DEFAULT_AVATAR_LABEL, avatar_label};
pub use form::{
    Credentials, Field, FormController, FormKind, FormPhase, Settlement, SubmitRejected,
};
pub use validation::{MAX_FULL_NAME_LENGTH, MIN_PASSWORD_LENGTH, ValidationError};
