//! Auth context for the current provider session
//!
//! This module provides a reactive authentication context that:
//! - Publishes the current user (the provider's current-user observable)
//! - Restores the persisted provider session after hydration
//! - Loads the public provider settings from the host
//! - Hands out the gateway and document cache used by the forms and menu

use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::provider::{IdentityToolkitGateway, LocalDocumentCache};
use crate::core::auth::{ProviderSettings, Session, User, run_submission};
use crate::core::{FormController, Settlement};
use crate::ui::alert::AlertContext;

/// Authentication state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// Initial state, restoring the provider session
    #[default]
    Loading,
    /// User is not authenticated
    Unauthenticated,
    /// User is authenticated
    Authenticated(User),
}

/// Auth context providing the session and provider access
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authentication state
    pub state: RwSignal<AuthState>,
    /// Public provider settings served by the host
    pub settings: RwSignal<ProviderSettings>,
    session: RwSignal<Option<Session>>,
}

impl AuthContext {
    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state.get(), AuthState::Authenticated(_))
    }

    /// Get current user (if authenticated)
    pub fn user(&self) -> Option<User> {
        match self.state.get() {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Gateway to the identity provider
    pub fn gateway(&self) -> IdentityToolkitGateway {
        IdentityToolkitGateway::new(self.settings, self.session, self.state)
    }

    /// Local cache of provider documents
    pub fn document_cache(&self) -> LocalDocumentCache {
        LocalDocumentCache::new(self.settings.get_untracked().cache_prefix)
    }

    /// Submit a login or registration form
    ///
    /// Invalid or duplicate submissions stop at the controller. Otherwise the
    /// provider call runs in the background, the form settles, the outcome is
    /// published as an alert, and `on_success` runs when the form succeeded.
    ///
    /// The background task runs without a reactive owner, so `on_success`
    /// must not look anything up from context; resolve it (`use_navigate`)
    /// in the component body and move it in. The form may be disposed before
    /// the provider answers, for example when the session appears mid-way
    /// through registration and the page redirects.
    pub fn submit_form(
        &self,
        form: RwSignal<FormController>,
        alerts: AlertContext,
        on_success: impl FnOnce() + 'static,
    ) {
        let credentials = match form.try_update(FormController::begin_submit) {
            Some(Ok(credentials)) => credentials,
            Some(Err(rejected)) => {
                log!("Submission rejected: {}", rejected);
                return;
            }
            None => return,
        };

        let kind = form.with_untracked(FormController::kind);
        let gateway = self.gateway();

        spawn_local(async move {
            run_submission(
                &gateway,
                kind,
                credentials,
                &alerts,
                |settlement| settle_form(form, settlement),
                on_success,
            )
            .await;
        });
    }
}

/// Settle a form that may already be disposed
fn settle_form(form: RwSignal<FormController>, settlement: Settlement) {
    if form.try_update(|f| f.settle(settlement)).is_none() {
        log!("Form closed before its submission settled");
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Start with Unauthenticated on both server and client to avoid hydration mismatch
    let state = RwSignal::new(AuthState::Unauthenticated);
    let settings = RwSignal::new(ProviderSettings::default());
    let session = RwSignal::new(None::<Session>);

    let ctx = AuthContext {
        state,
        settings,
        session,
    };

    // Restore the provider session and fetch settings after hydration (client-side only)
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            state.set(AuthState::Loading);

            match super::provider::load_session() {
                Some(stored) => {
                    state.set(AuthState::Authenticated(stored.user.clone()));
                    session.set(Some(stored));
                }
                None => state.set(AuthState::Unauthenticated),
            }

            spawn_local(async move {
                match fetch_provider_settings().await {
                    Ok(loaded) => {
                        if !loaded.is_configured() {
                            leptos::logging::warn!("Identity provider API key is not configured");
                        }
                        settings.set(loaded);
                    }
                    Err(e) => leptos::logging::error!("Failed to load provider settings: {}", e),
                }
            });
        });
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Fetch the public provider settings from the host
#[cfg(not(feature = "ssr"))]
async fn fetch_provider_settings() -> Result<ProviderSettings, String> {
    use gloo_net::http::Request;

    let response = Request::get("/api/auth/config")
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response.json().await.map_err(|e| e.to_string())
}
