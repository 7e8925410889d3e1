//! Authentication flows
//!
//! Coordinates the form controller, the identity provider gateway and the
//! alert relay for the three user actions: login, registration and logout.
//! Every provider failure ends here as an alert; nothing propagates further.

use leptos::logging::{log, warn};

use super::gateway::{AuthGateway, DocumentCache, SignUpOutcome, sign_up};
use crate::core::alert::AlertSink;
use crate::core::form::{Credentials, FormController, FormKind, Settlement, SubmitRejected};

/// Alert text after a successful sign-in
pub const LOGIN_SUCCESS: &str = "success login";

/// Alert text after a successful registration
pub const REGISTRATION_SUCCESS: &str = "Welcome on board 🚀";

/// Alert text after a successful logout
pub const LOGOUT_SUCCESS: &str = "success logout";

/// Outcome of one submission, ready to be published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    pub settlement: Settlement,
    pub message: String,
    pub is_success: bool,
}

impl SubmissionReport {
    fn success(message: impl Into<String>) -> Self {
        Self {
            settlement: Settlement::Success,
            message: message.into(),
            is_success: true,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            settlement: Settlement::Failure,
            message: message.into(),
            is_success: false,
        }
    }

    /// Overwrite the current alert with this outcome
    pub fn publish<S: AlertSink + ?Sized>(&self, alerts: &S) {
        alerts.emit(&self.message, self.is_success);
    }
}

/// Compensating notice for an account created without its display name
pub fn unnamed_account_notice(reason: &str) -> String {
    format!("Account created, but the display name could not be saved: {reason}")
}

/// Run the provider call for validated credentials
pub async fn authenticate<G>(gateway: &G, kind: FormKind, credentials: Credentials) -> SubmissionReport
where
    G: AuthGateway + ?Sized,
{
    match kind {
        FormKind::Login => match gateway
            .sign_in(&credentials.email, &credentials.password)
            .await
        {
            Ok(user) => {
                log!("Signed in as {}", user.uid);
                SubmissionReport::success(LOGIN_SUCCESS)
            }
            Err(err) => {
                warn!("Sign-in failed: {}", err);
                SubmissionReport::failure(err.to_string())
            }
        },
        FormKind::Registration => {
            let full_name = credentials.full_name.unwrap_or_default();
            match sign_up(gateway, &credentials.email, &credentials.password, &full_name).await {
                Ok(SignUpOutcome::Complete(user)) => {
                    log!("Registered {}", user.uid);
                    SubmissionReport::success(REGISTRATION_SUCCESS)
                }
                Ok(SignUpOutcome::Unnamed { user, reason }) => {
                    warn!("Registered {} without display name: {}", user.uid, reason);
                    // The account exists; resubmitting would only hit "email in use"
                    SubmissionReport {
                        settlement: Settlement::Success,
                        message: unnamed_account_notice(&reason.to_string()),
                        is_success: false,
                    }
                }
                Err(err) => {
                    warn!("Registration failed: {}", err);
                    SubmissionReport::failure(err.to_string())
                }
            }
        }
    }
}

/// Validate, call the provider, settle the form and publish the alert
///
/// Rejected attempts (invalid fields, submission already in flight) never
/// reach the gateway and leave the alert untouched.
pub async fn submit<G, S>(
    form: &mut FormController,
    gateway: &G,
    alerts: &S,
) -> Result<Settlement, SubmitRejected>
where
    G: AuthGateway + ?Sized,
    S: AlertSink + ?Sized,
{
    let credentials = form.begin_submit()?;
    let kind = form.kind();
    let settlement = run_submission(
        gateway,
        kind,
        credentials,
        alerts,
        |settlement| form.settle(settlement),
        || {},
    )
    .await;
    Ok(settlement)
}

/// Finish a submission that already passed `begin_submit`
///
/// Calls the provider, then settles the form, publishes the alert and, on
/// success, runs `on_success` (typically navigation), in that order. The
/// form is only reachable through `settle`, so a caller whose form is gone
/// by the time the provider answers can make that a no-op.
pub async fn run_submission<G, S>(
    gateway: &G,
    kind: FormKind,
    credentials: Credentials,
    alerts: &S,
    settle: impl FnOnce(Settlement),
    on_success: impl FnOnce(),
) -> Settlement
where
    G: AuthGateway + ?Sized,
    S: AlertSink + ?Sized,
{
    let report = authenticate(gateway, kind, credentials).await;
    settle(report.settlement);
    report.publish(alerts);

    if report.settlement == Settlement::Success {
        on_success();
    }
    report.settlement
}

/// Sign out, purge the local document cache, and report the result
///
/// The cache is only cleared once the provider session is gone. Returns
/// whether both steps succeeded.
pub async fn logout<G, C, S>(gateway: &G, cache: &C, alerts: &S) -> bool
where
    G: AuthGateway + ?Sized,
    C: DocumentCache + ?Sized,
    S: AlertSink + ?Sized,
{
    let result = async {
        gateway.sign_out().await?;
        cache.clear().await
    }
    .await;

    match result {
        Ok(()) => {
            log!("Signed out");
            alerts.emit(LOGOUT_SUCCESS, true);
            true
        }
        Err(err) => {
            warn!("Logout failed: {}", err);
            alerts.emit(&err.to_string(), false);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alert::{AlertRelay, AlertState, Severity};
    use crate::core::auth::gateway::GatewayError;
    use crate::core::auth::gateway::testing::{FakeCache, FakeGateway};
    use crate::core::form::{Field, FormPhase};
    use std::cell::{Cell, RefCell};

    fn login_form() -> FormController {
        let mut form = FormController::new(FormKind::Login);
        form.set_field(Field::Email, "jane@example.com");
        form.set_field(Field::Password, "a very long secret");
        form
    }

    fn registration_form() -> FormController {
        let mut form = FormController::new(FormKind::Registration);
        form.set_field(Field::Email, "jane@example.com");
        form.set_field(Field::FullName, "Jane Doe");
        form.set_field(Field::Password, "a very long secret");
        form.set_field(Field::RepeatPassword, "a very long secret");
        form
    }

    #[tokio::test]
    async fn test_successful_login_alert() {
        let gateway = FakeGateway::default();
        let alerts = RefCell::new(AlertRelay::new());
        let mut form = login_form();

        let settlement = submit(&mut form, &gateway, &alerts).await.unwrap();

        assert_eq!(settlement, Settlement::Success);
        assert_eq!(form.phase(), FormPhase::Settled(Settlement::Success));
        assert_eq!(
            alerts.borrow().current(),
            &AlertState {
                visible: true,
                severity: Severity::Info,
                message: "success login".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_failed_login_alert_carries_provider_message() {
        let gateway = FakeGateway {
            sign_in_error: Some(GatewayError::Provider("auth/wrong-password".to_string())),
            ..Default::default()
        };
        let alerts = RefCell::new(AlertRelay::new());
        let mut form = login_form();

        let settlement = submit(&mut form, &gateway, &alerts).await.unwrap();

        assert_eq!(settlement, Settlement::Failure);
        assert_eq!(
            alerts.borrow().current(),
            &AlertState {
                visible: true,
                severity: Severity::Error,
                message: "auth/wrong-password".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_submit_while_submitting_never_calls_gateway() {
        let gateway = FakeGateway::default();
        let alerts = RefCell::new(AlertRelay::new());
        let mut form = login_form();

        // First submission is in flight
        let credentials = form.begin_submit().unwrap();

        let second = submit(&mut form, &gateway, &alerts).await;
        assert_eq!(second, Err(SubmitRejected::AlreadySubmitting));
        assert_eq!(gateway.call_count("sign_in"), 0);

        let report = authenticate(&gateway, FormKind::Login, credentials).await;
        form.settle(report.settlement);
        assert_eq!(gateway.call_count("sign_in"), 1);
    }

    #[tokio::test]
    async fn test_invalid_form_leaves_alert_untouched() {
        let gateway = FakeGateway::default();
        let alerts = RefCell::new(AlertRelay::new());
        let mut form = login_form();
        form.set_field(Field::Password, "short");

        let result = submit(&mut form, &gateway, &alerts).await;

        assert!(matches!(result, Err(SubmitRejected::Invalid { .. })));
        assert!(gateway.calls.borrow().is_empty());
        assert!(!alerts.borrow().current().visible);
    }

    #[tokio::test]
    async fn test_registration_success_alert() {
        let gateway = FakeGateway::default();
        let alerts = RefCell::new(AlertRelay::new());
        let mut form = registration_form();

        submit(&mut form, &gateway, &alerts).await.unwrap();

        assert_eq!(alerts.borrow().current().message, "Welcome on board 🚀");
        assert_eq!(alerts.borrow().current().severity, Severity::Info);
        assert_eq!(
            gateway.current_user().and_then(|u| u.display_name),
            Some("Jane Doe".to_string())
        );
    }

    #[tokio::test]
    async fn test_registration_with_failed_naming_reports_compensation() {
        let gateway = FakeGateway {
            profile_error: Some(GatewayError::Network("Failed to fetch".to_string())),
            ..Default::default()
        };
        let alerts = RefCell::new(AlertRelay::new());
        let mut form = registration_form();

        let settlement = submit(&mut form, &gateway, &alerts).await.unwrap();

        assert_eq!(settlement, Settlement::Success);
        let relay = alerts.borrow();
        assert_eq!(relay.current().severity, Severity::Error);
        assert_eq!(
            relay.current().message,
            "Account created, but the display name could not be saved: Failed to fetch"
        );
    }

    #[tokio::test]
    async fn test_registration_failure_alert() {
        let gateway = FakeGateway {
            create_error: Some(GatewayError::Provider("EMAIL_EXISTS".to_string())),
            ..Default::default()
        };
        let alerts = RefCell::new(AlertRelay::new());
        let mut form = registration_form();

        let settlement = submit(&mut form, &gateway, &alerts).await.unwrap();

        assert_eq!(settlement, Settlement::Failure);
        assert_eq!(alerts.borrow().current(), &AlertState::from_outcome("EMAIL_EXISTS", false));
    }

    #[tokio::test]
    async fn test_run_submission_orders_settle_publish_then_success() {
        let gateway = FakeGateway::default();
        let alerts = RefCell::new(AlertRelay::new());
        let mut form = login_form();
        let credentials = form.begin_submit().unwrap();
        let steps = RefCell::new(Vec::new());

        let settlement = run_submission(
            &gateway,
            FormKind::Login,
            credentials,
            &alerts,
            |settlement| {
                steps.borrow_mut().push("settle");
                form.settle(settlement);
                assert!(!alerts.borrow().current().visible);
            },
            || {
                steps.borrow_mut().push("navigate");
                assert!(alerts.borrow().current().visible);
            },
        )
        .await;

        assert_eq!(settlement, Settlement::Success);
        assert_eq!(steps.into_inner(), ["settle", "navigate"]);
        assert_eq!(form.phase(), FormPhase::Settled(Settlement::Success));
    }

    #[tokio::test]
    async fn test_run_submission_failure_skips_success_step() {
        let gateway = FakeGateway {
            sign_in_error: Some(GatewayError::Provider("auth/user-not-found".to_string())),
            ..Default::default()
        };
        let alerts = RefCell::new(AlertRelay::new());
        let mut form = login_form();
        let credentials = form.begin_submit().unwrap();
        let navigated = Cell::new(false);

        let settlement = run_submission(
            &gateway,
            FormKind::Login,
            credentials,
            &alerts,
            |_| {},
            || navigated.set(true),
        )
        .await;

        assert_eq!(settlement, Settlement::Failure);
        assert!(!navigated.get());
        assert_eq!(alerts.borrow().current().message, "auth/user-not-found");
    }

    #[tokio::test]
    async fn test_registration_signed_in_before_naming_finishes() {
        // The session exists as soon as the account is created, while the
        // display name is still being saved
        let gateway = FakeGateway {
            profile_error: Some(GatewayError::Network("Failed to fetch".to_string())),
            ..Default::default()
        };
        let alerts = RefCell::new(AlertRelay::new());
        let mut form = registration_form();
        let credentials = form.begin_submit().unwrap();
        let navigations = Cell::new(0);

        // The form was torn down by the time the provider answered
        drop(form);

        let settlement = run_submission(
            &gateway,
            FormKind::Registration,
            credentials,
            &alerts,
            |_| {},
            || navigations.set(navigations.get() + 1),
        )
        .await;

        assert_eq!(settlement, Settlement::Success);
        assert_eq!(navigations.get(), 1);
        assert!(gateway.current_user().is_some());
        assert_eq!(alerts.borrow().current().severity, Severity::Error);
        assert_eq!(
            gateway.calls.borrow().as_slice(),
            ["create_account", "update_profile"]
        );
    }

    #[tokio::test]
    async fn test_logout_success() {
        let gateway = FakeGateway::default();
        let cache = FakeCache::default();
        let alerts = RefCell::new(AlertRelay::new());

        assert!(logout(&gateway, &cache, &alerts).await);
        assert_eq!(cache.cleared.get(), 1);
        assert_eq!(alerts.borrow().current(), &AlertState::from_outcome("success logout", true));
    }

    #[tokio::test]
    async fn test_logout_sign_out_failure_keeps_cache() {
        let gateway = FakeGateway {
            sign_out_error: Some(GatewayError::Network("offline".to_string())),
            ..Default::default()
        };
        let cache = FakeCache::default();
        let alerts = RefCell::new(AlertRelay::new());

        assert!(!logout(&gateway, &cache, &alerts).await);
        assert_eq!(cache.cleared.get(), 0);
        assert_eq!(alerts.borrow().current(), &AlertState::from_outcome("offline", false));
    }

    #[tokio::test]
    async fn test_logout_cache_failure_reported() {
        let gateway = FakeGateway::default();
        let cache = FakeCache {
            error: Some(GatewayError::Unavailable("storage blocked".to_string())),
            ..Default::default()
        };
        let alerts = RefCell::new(AlertRelay::new());

        assert!(!logout(&gateway, &cache, &alerts).await);
        assert_eq!(gateway.call_count("sign_out"), 1);
        assert_eq!(alerts.borrow().current().severity, Severity::Error);
    }

    #[tokio::test]
    async fn test_latest_outcome_wins() {
        let failing = FakeGateway {
            sign_in_error: Some(GatewayError::Provider("auth/wrong-password".to_string())),
            ..Default::default()
        };
        let gateway = FakeGateway::default();
        let alerts = RefCell::new(AlertRelay::new());

        let mut form = login_form();
        submit(&mut form, &failing, &alerts).await.unwrap();
        form.reset();
        submit(&mut form, &gateway, &alerts).await.unwrap();

        assert_eq!(alerts.borrow().current(), &AlertState::from_outcome("success login", true));
    }
}
