//! Common reusable UI components

pub mod form;

pub use form::{FormField, PasswordField, SubmitButton};
