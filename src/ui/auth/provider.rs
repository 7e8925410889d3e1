//! Browser-side identity provider gateway
//!
//! Talks to the Identity Toolkit REST API with `gloo-net` and keeps the
//! provider session in localStorage, which is what the provider SDK does for
//! a web app. The session signal doubles as the current-user observable.

use async_trait::async_trait;
use leptos::prelude::*;
use serde::Serialize;

use super::context::AuthState;
use crate::core::auth::{
    AccountResponse, AuthGateway, DocumentCache, GatewayError, IdentityMethod, PasswordRequest,
    ProfileUpdateRequest, ProviderSettings, Session, User,
};

#[cfg(not(feature = "ssr"))]
const STORAGE_KEY_SESSION: &str = "voypost_session";

/// Identity Toolkit gateway bound to the auth context signals
#[derive(Clone, Copy)]
pub struct IdentityToolkitGateway {
    #[cfg_attr(feature = "ssr", allow(dead_code))]
    settings: RwSignal<ProviderSettings>,
    session: RwSignal<Option<Session>>,
    state: RwSignal<AuthState>,
}

impl IdentityToolkitGateway {
    pub(super) fn new(
        settings: RwSignal<ProviderSettings>,
        session: RwSignal<Option<Session>>,
        state: RwSignal<AuthState>,
    ) -> Self {
        Self {
            settings,
            session,
            state,
        }
    }

    /// Store a new session (or none) and publish the matching auth state
    fn publish(&self, session: Option<Session>) {
        match &session {
            Some(session) => {
                save_session(session);
                self.state.set(AuthState::Authenticated(session.user.clone()));
            }
            None => {
                clear_session();
                self.state.set(AuthState::Unauthenticated);
            }
        }
        self.session.set(session);
    }

    /// POST a JSON body to an `accounts:*` method
    #[cfg(not(feature = "ssr"))]
    async fn call<B: Serialize>(
        &self,
        method: IdentityMethod,
        body: &B,
    ) -> Result<AccountResponse, GatewayError> {
        use crate::core::auth::parse_error_body;
        use gloo_net::http::Request;

        let url = self.settings.get_untracked().method_url(method)?;

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| GatewayError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        if response.ok() {
            response
                .json()
                .await
                .map_err(|e| GatewayError::Network(e.to_string()))
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(parse_error_body(status, &body))
        }
    }

    #[cfg(feature = "ssr")]
    async fn call<B: Serialize>(
        &self,
        _method: IdentityMethod,
        _body: &B,
    ) -> Result<AccountResponse, GatewayError> {
        Err(GatewayError::Unavailable(
            "Sign-in is not available on the server".to_string(),
        ))
    }

    async fn password_call(
        &self,
        method: IdentityMethod,
        email: &str,
        password: &str,
    ) -> Result<User, GatewayError> {
        let response = self
            .call(method, &PasswordRequest::new(email, password))
            .await?;
        let session = response.into_session(None)?;
        let user = session.user.clone();
        self.publish(Some(session));
        Ok(user)
    }
}

#[async_trait(?Send)]
impl AuthGateway for IdentityToolkitGateway {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, GatewayError> {
        self.password_call(IdentityMethod::SignInWithPassword, email, password)
            .await
    }

    async fn create_account(&self, email: &str, password: &str) -> Result<User, GatewayError> {
        self.password_call(IdentityMethod::SignUp, email, password)
            .await
    }

    async fn update_profile(&self, display_name: &str) -> Result<User, GatewayError> {
        let current = self
            .session
            .get_untracked()
            .ok_or_else(|| GatewayError::Unavailable("No signed-in user".to_string()))?;

        let request = ProfileUpdateRequest {
            id_token: &current.id_token,
            display_name,
            return_secure_token: true,
        };
        let response = self.call(IdentityMethod::Update, &request).await?;
        let session = response.into_session(Some(&current))?;
        let user = session.user.clone();
        self.publish(Some(session));
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), GatewayError> {
        // Web sign-out only drops the locally held session
        self.publish(None);
        Ok(())
    }

    fn current_user(&self) -> Option<User> {
        self.session.get_untracked().map(|s| s.user)
    }
}

/// Cached provider documents in localStorage, keyed by a common prefix
#[derive(Debug, Clone)]
pub struct LocalDocumentCache {
    prefix: String,
}

impl LocalDocumentCache {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

#[async_trait(?Send)]
impl DocumentCache for LocalDocumentCache {
    async fn clear(&self) -> Result<(), GatewayError> {
        let removed = remove_prefixed(&self.prefix)?;
        leptos::logging::log!("Cleared {} cached documents", removed);
        Ok(())
    }
}

/// Remove every localStorage entry whose key starts with `prefix`
#[cfg(not(feature = "ssr"))]
fn remove_prefixed(prefix: &str) -> Result<usize, GatewayError> {
    let storage = web_sys::window()
        .ok_or_else(|| GatewayError::Unavailable("No window available".to_string()))?
        .local_storage()
        .map_err(|_| GatewayError::Unavailable("Failed to get localStorage".to_string()))?
        .ok_or_else(|| GatewayError::Unavailable("localStorage not available".to_string()))?;

    let length = storage
        .length()
        .map_err(|_| GatewayError::Unavailable("Failed to read localStorage".to_string()))?;

    // Collect first: removing while indexing shifts the keys
    let keys: Vec<String> = (0..length)
        .filter_map(|index| storage.key(index).ok().flatten())
        .filter(|key| key.starts_with(prefix))
        .collect();

    for key in &keys {
        storage
            .remove_item(key)
            .map_err(|_| GatewayError::Unavailable(format!("Failed to remove {key}")))?;
    }

    Ok(keys.len())
}

#[cfg(feature = "ssr")]
fn remove_prefixed(_prefix: &str) -> Result<usize, GatewayError> {
    Ok(0)
}

/// Load the persisted provider session
#[cfg(not(feature = "ssr"))]
pub(super) fn load_session() -> Option<Session> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let json = storage.get_item(STORAGE_KEY_SESSION).ok()??;
    serde_json::from_str(&json).ok()
}

#[cfg(not(feature = "ssr"))]
fn save_session(session: &Session) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(
                STORAGE_KEY_SESSION,
                &serde_json::to_string(session).unwrap_or_default(),
            );
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn clear_session() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(STORAGE_KEY_SESSION);
        }
    }
}

#[cfg(feature = "ssr")]
fn save_session(_session: &Session) {}

#[cfg(feature = "ssr")]
fn clear_session() {}
