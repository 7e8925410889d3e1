//! Identity Toolkit REST wire format
//!
//! Request and response bodies for the provider's `accounts:*` methods, the
//! public provider settings handed to the browser, and parsing of the
//! provider's error envelope.

use serde::{Deserialize, Serialize};

use super::gateway::GatewayError;
use super::session::{Session, User};
use crate::core::alert::DEFAULT_ALERT_HIDE_MS;

/// Default Identity Toolkit base URL
pub const DEFAULT_IDENTITY_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1";

/// Default prefix of locally cached provider documents
pub const DEFAULT_CACHE_PREFIX: &str = "firestore";

/// Public settings the browser needs to reach the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Web API key of the provider project (public by design of the provider)
    pub api_key: Option<String>,
    pub identity_endpoint: String,
    pub cache_prefix: String,
    pub alert_hide_ms: u32,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            identity_endpoint: DEFAULT_IDENTITY_ENDPOINT.to_string(),
            cache_prefix: DEFAULT_CACHE_PREFIX.to_string(),
            alert_hide_ms: DEFAULT_ALERT_HIDE_MS,
        }
    }
}

impl ProviderSettings {
    pub fn is_configured(&self) -> bool {
        self.api_key.as_ref().is_some_and(|key| !key.is_empty())
    }

    /// Full URL of an `accounts:*` method
    pub fn method_url(&self, method: IdentityMethod) -> Result<String, GatewayError> {
        let key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                GatewayError::Unavailable("Identity provider is not configured".to_string())
            })?;

        Ok(format!(
            "{}/accounts:{}?key={}",
            self.identity_endpoint.trim_end_matches('/'),
            method.as_str(),
            key
        ))
    }
}

/// Identity Toolkit methods used by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityMethod {
    SignInWithPassword,
    SignUp,
    Update,
}

impl IdentityMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityMethod::SignInWithPassword => "signInWithPassword",
            IdentityMethod::SignUp => "signUp",
            IdentityMethod::Update => "update",
        }
    }
}

/// Body of `signInWithPassword` and `signUp`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

impl<'a> PasswordRequest<'a> {
    pub fn new(email: &'a str, password: &'a str) -> Self {
        Self {
            email,
            password,
            return_secure_token: true,
        }
    }
}

/// Body of `update` when setting the display name
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest<'a> {
    pub id_token: &'a str,
    pub display_name: &'a str,
    pub return_secure_token: bool,
}

/// Account payload returned by every `accounts:*` method used here
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub local_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl AccountResponse {
    /// Build the session, carrying over tokens the response omits
    pub fn into_session(self, previous: Option<&Session>) -> Result<Session, GatewayError> {
        let id_token = self
            .id_token
            .or_else(|| previous.map(|s| s.id_token.clone()))
            .ok_or_else(|| GatewayError::Network("Identity provider returned no token".to_string()))?;
        let refresh_token = self
            .refresh_token
            .or_else(|| previous.map(|s| s.refresh_token.clone()))
            .unwrap_or_default();
        let email = self
            .email
            .or_else(|| previous.map(|s| s.user.email.clone()))
            .unwrap_or_default();
        // An empty display name means "unset" for the provider
        let display_name = self.display_name.filter(|name| !name.is_empty());

        Ok(Session {
            user: User {
                uid: self.local_id,
                email,
                display_name,
            },
            id_token,
            refresh_token,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Turn a non-success response into a gateway error
///
/// The provider's own message is kept verbatim; bodies that are not the
/// provider's envelope become a transport error naming the status code.
pub fn parse_error_body(status: u16, body: &str) -> GatewayError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => {
            GatewayError::Provider(envelope.error.message)
        }
        _ => GatewayError::Network(format!("Identity provider returned HTTP {}", status)),
    }
}
