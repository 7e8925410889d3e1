//! Validation rules for the authentication forms
//!
//! Every rule is a pure function over the current field snapshot. Messages are
//! shown inline next to the offending field and never raised as global alerts.

use regex::Regex;
use std::sync::LazyLock;

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LENGTH: usize = 12;

/// Maximum length of the full name field, counted in characters
pub const MAX_FULL_NAME_LENGTH: usize = 15;

/// Email grammar used by browser form controls: printable atoms in the local
/// part and dotted domain labels of up to 63 characters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// Two capitalized words, e.g. "John Smith"
static FULL_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z]{1,10}\s[A-Z][a-z]{1,10}$").expect("full name pattern compiles")
});

/// Field-scoped validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmailRequired,
    InvalidEmail,
    PasswordRequired,
    PasswordTooShort { min: usize },
    ConfirmationRequired,
    PasswordMismatch,
    FullNameRequired,
    FullNameTooLong { max: usize },
    FullNameFormat,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmailRequired => write!(f, "Email is required"),
            ValidationError::InvalidEmail => write!(f, "Enter a valid email"),
            ValidationError::PasswordRequired => write!(f, "Password is required"),
            ValidationError::PasswordTooShort { min } => {
                write!(f, "Password should be of minimum {} characters length", min)
            }
            ValidationError::ConfirmationRequired => write!(f, "Confirm password is required"),
            ValidationError::PasswordMismatch => write!(f, "Password must match"),
            ValidationError::FullNameRequired => write!(f, "Required"),
            ValidationError::FullNameTooLong { max } => {
                write!(f, "Must be {} characters or less", max)
            }
            ValidationError::FullNameFormat => write!(
                f,
                "Full Name must contain with two capitalized words. Example: John Smith"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate an email address
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validate a password
///
/// Length is counted in Unicode scalar values. Browser form libraries count
/// UTF-16 code units instead, so a password made of characters outside the
/// Basic Multilingual Plane (emoji) is shorter here: six emoji are 12 code
/// units in the browser but only 6 characters to this check.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

/// Validate the repeated password against the password it confirms
pub fn validate_repeat_password(password: &str, repeat: &str) -> Result<(), ValidationError> {
    if repeat.is_empty() {
        return Err(ValidationError::ConfirmationRequired);
    }
    if repeat != password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Validate a full name ("Firstname Lastname")
pub fn validate_full_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::FullNameRequired);
    }
    if name.chars().count() > MAX_FULL_NAME_LENGTH {
        return Err(ValidationError::FullNameTooLong {
            max: MAX_FULL_NAME_LENGTH,
        });
    }
    if !FULL_NAME_PATTERN.is_match(name) {
        return Err(ValidationError::FullNameFormat);
    }
    Ok(())
}
