//! Form controller for the login and registration screens
//!
//! Holds field values, touched flags, per-field errors and the submission
//! lifecycle:
//!
//! ```text
//! Idle -> Editing -> Submitting -> Settled(Success | Failure) -> Idle
//! ```
//!
//! The controller is a plain value so it can live inside a reactive signal
//! on the page and be driven directly from tests.

use std::collections::{BTreeMap, BTreeSet};

use super::validation::{
    ValidationError, validate_email, validate_full_name, validate_password,
    validate_repeat_password,
};

/// Form field identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Email,
    FullName,
    Password,
    RepeatPassword,
}

impl Field {
    /// Name used for the input element
    pub fn name(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::FullName => "fullName",
            Field::Password => "password",
            Field::RepeatPassword => "repeatPassword",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Email => "Email Address",
            Field::FullName => "Full Name",
            Field::Password => "Password",
            Field::RepeatPassword => "Repeat password",
        }
    }
}

/// Which screen the form belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Registration,
}

impl FormKind {
    /// Fields rendered (and validated) for this kind of form
    pub fn fields(&self) -> &'static [Field] {
        match self {
            FormKind::Login => &[Field::Email, Field::Password],
            FormKind::Registration => &[
                Field::Email,
                Field::FullName,
                Field::Password,
                Field::RepeatPassword,
            ],
        }
    }
}

/// How a submission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Success,
    Failure,
}

/// Submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Editing,
    Submitting,
    Settled(Settlement),
}

/// Snapshot of the values handed to the identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Present for registration only
    pub full_name: Option<String>,
}

/// Reasons a submit attempt is refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("The form has invalid fields")]
    Invalid { fields: Vec<Field> },
}

/// Field values, touched flags and errors for one form instance
#[derive(Debug, Clone, PartialEq)]
pub struct FormController {
    kind: FormKind,
    values: BTreeMap<Field, String>,
    touched: BTreeSet<Field>,
    errors: BTreeMap<Field, ValidationError>,
    phase: FormPhase,
}

impl FormController {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            values: kind
                .fields()
                .iter()
                .map(|field| (*field, String::new()))
                .collect(),
            touched: BTreeSet::new(),
            errors: BTreeMap::new(),
            phase: FormPhase::Idle,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Current value of a field (empty for fields this form does not have)
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Current error of a field, whether or not it has been touched
    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Error text to render next to the field; hidden until the field is touched
    pub fn visible_error(&self, field: Field) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        self.error(field).map(ToString::to_string)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.has_errors()
    }

    /// Record a new value for a field and re-validate it
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if !self.values.contains_key(&field) {
            return;
        }
        self.values.insert(field, value.into());
        self.touched.insert(field);
        self.revalidate(field);

        // The confirmation depends on the password it repeats
        if field == Field::Password && self.is_touched(Field::RepeatPassword) {
            self.revalidate(Field::RepeatPassword);
        }

        if matches!(self.phase, FormPhase::Idle | FormPhase::Settled(_)) {
            self.phase = FormPhase::Editing;
        }
    }

    /// Mark a field as touched (blur) and validate it
    pub fn touch(&mut self, field: Field) {
        if !self.values.contains_key(&field) {
            return;
        }
        self.touched.insert(field);
        self.revalidate(field);
    }

    /// Validate every field and enter `Submitting` when the form is clean
    ///
    /// Returns the credentials to send to the identity provider. A second
    /// call while a submission is in flight is rejected without side effects.
    pub fn begin_submit(&mut self) -> Result<Credentials, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::AlreadySubmitting);
        }

        for field in self.kind.fields() {
            self.touched.insert(*field);
            self.revalidate(*field);
        }

        if self.has_errors() {
            self.phase = FormPhase::Editing;
            return Err(SubmitRejected::Invalid {
                fields: self.errors.keys().copied().collect(),
            });
        }

        self.phase = FormPhase::Submitting;

        Ok(Credentials {
            email: self.value(Field::Email).to_string(),
            password: self.value(Field::Password).to_string(),
            full_name: match self.kind {
                FormKind::Login => None,
                FormKind::Registration => Some(self.value(Field::FullName).to_string()),
            },
        })
    }

    /// Record the result of the in-flight submission
    ///
    /// Ignored unless a submission is in flight.
    pub fn settle(&mut self, settlement: Settlement) {
        if self.is_submitting() {
            self.phase = FormPhase::Settled(settlement);
        }
    }

    /// Return a settled form to `Idle`, keeping the entered values
    pub fn reset(&mut self) {
        if matches!(self.phase, FormPhase::Settled(_)) {
            self.phase = FormPhase::Idle;
        }
    }

    fn revalidate(&mut self, field: Field) {
        let result = match field {
            Field::Email => validate_email(self.value(Field::Email)),
            Field::Password => validate_password(self.value(Field::Password)),
            Field::RepeatPassword => validate_repeat_password(
                self.value(Field::Password),
                self.value(Field::RepeatPassword),
            ),
            Field::FullName => validate_full_name(self.value(Field::FullName)),
        };

        match result {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(error) => {
                self.errors.insert(field, error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_login() -> FormController {
        let mut form = FormController::new(FormKind::Login);
        form.set_field(Field::Email, "jane@example.com");
        form.set_field(Field::Password, "a very long secret");
        form
    }

    fn filled_registration() -> FormController {
        let mut form = FormController::new(FormKind::Registration);
        form.set_field(Field::Email, "jane@example.com");
        form.set_field(Field::FullName, "Jane Doe");
        form.set_field(Field::Password, "a very long secret");
        form.set_field(Field::RepeatPassword, "a very long secret");
        form
    }

    #[test]
    fn test_new_form_is_idle_and_clean() {
        let form = FormController::new(FormKind::Registration);
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(!form.has_errors());
        assert_eq!(form.value(Field::FullName), "");
        assert!(!form.is_touched(Field::Email));
    }

    #[test]
    fn test_editing_validates_and_touches_field() {
        let mut form = FormController::new(FormKind::Login);
        form.set_field(Field::Email, "not-an-email");

        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.is_touched(Field::Email));
        assert_eq!(
            form.visible_error(Field::Email),
            Some("Enter a valid email".to_string())
        );
        // Untouched fields carry no error yet
        assert!(form.error(Field::Password).is_none());
        assert!(!form.can_submit());
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut form = FormController::new(FormKind::Login);
        let _ = form.begin_submit();
        assert!(form.visible_error(Field::Password).is_some());

        let mut fresh = FormController::new(FormKind::Login);
        fresh.set_field(Field::Email, "jane@example.com");
        assert!(fresh.visible_error(Field::Password).is_none());
    }

    #[test]
    fn test_login_form_ignores_registration_fields() {
        let mut form = FormController::new(FormKind::Login);
        form.set_field(Field::FullName, "john smith");
        assert_eq!(form.value(Field::FullName), "");
        assert!(form.error(Field::FullName).is_none());
    }

    #[test]
    fn test_submit_blocked_by_malformed_email() {
        let mut form = filled_login();
        form.set_field(Field::Email, "jane@");

        let rejected = form.begin_submit().unwrap_err();
        assert_eq!(
            rejected,
            SubmitRejected::Invalid {
                fields: vec![Field::Email]
            }
        );
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_submit_blocked_by_short_password() {
        let mut form = filled_login();
        form.set_field(Field::Password, "short");

        assert!(form.begin_submit().is_err());
        assert_eq!(
            form.visible_error(Field::Password),
            Some("Password should be of minimum 12 characters length".to_string())
        );
    }

    #[test]
    fn test_submit_blocked_by_mismatched_confirmation() {
        let mut form = filled_registration();
        form.set_field(Field::RepeatPassword, "a very long secreT");

        let rejected = form.begin_submit().unwrap_err();
        assert_eq!(
            rejected,
            SubmitRejected::Invalid {
                fields: vec![Field::RepeatPassword]
            }
        );
    }

    #[test]
    fn test_password_edit_revalidates_confirmation() {
        let mut form = filled_registration();
        assert!(form.error(Field::RepeatPassword).is_none());

        form.set_field(Field::Password, "another long secret");
        assert_eq!(
            form.error(Field::RepeatPassword),
            Some(&ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_submit_empty_form_reports_every_field() {
        let mut form = FormController::new(FormKind::Registration);
        let rejected = form.begin_submit().unwrap_err();
        assert_eq!(
            rejected,
            SubmitRejected::Invalid {
                fields: vec![
                    Field::Email,
                    Field::FullName,
                    Field::Password,
                    Field::RepeatPassword
                ]
            }
        );
        assert_eq!(
            form.visible_error(Field::FullName),
            Some("Required".to_string())
        );
    }

    #[test]
    fn test_valid_login_submit_yields_credentials() {
        let mut form = filled_login();
        let credentials = form.begin_submit().unwrap();

        assert_eq!(credentials.email, "jane@example.com");
        assert_eq!(credentials.password, "a very long secret");
        assert_eq!(credentials.full_name, None);
        assert!(form.is_submitting());
        assert!(!form.can_submit());
    }

    #[test]
    fn test_registration_submit_includes_full_name() {
        let mut form = filled_registration();
        let credentials = form.begin_submit().unwrap();
        assert_eq!(credentials.full_name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut form = filled_login();
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.begin_submit(), Err(SubmitRejected::AlreadySubmitting));
        assert!(form.is_submitting());
    }

    #[test]
    fn test_settle_and_reset_lifecycle() {
        let mut form = filled_login();

        // Settling without an in-flight submission is ignored
        form.settle(Settlement::Success);
        assert_eq!(form.phase(), FormPhase::Editing);

        form.begin_submit().unwrap();
        form.settle(Settlement::Failure);
        assert_eq!(form.phase(), FormPhase::Settled(Settlement::Failure));

        form.reset();
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.value(Field::Email), "jane@example.com");

        // User may resubmit after a failure
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_editing_after_settlement_returns_to_editing() {
        let mut form = filled_login();
        form.begin_submit().unwrap();
        form.settle(Settlement::Failure);

        form.set_field(Field::Password, "yet another long one");
        assert_eq!(form.phase(), FormPhase::Editing);
    }
}
