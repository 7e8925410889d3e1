//! Identity provider seam
//!
//! [`AuthGateway`] is a thin pass-through to the external identity provider.
//! The browser implementation lives in `ui::auth::provider`; tests use
//! in-memory fakes. Futures are `?Send` because browser futures are not.

use async_trait::async_trait;

use super::session::User;

/// Failure reported by the identity provider or the transport to it
///
/// The message is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Rejected by the provider (bad credentials, email in use, ...)
    #[error("{0}")]
    Provider(String),

    /// The provider could not be reached or answered garbage
    #[error("{0}")]
    Network(String),

    /// The operation cannot run here (no configuration, no signed-in user, no browser)
    #[error("{0}")]
    Unavailable(String),
}

/// Operations consumed from the identity provider
#[async_trait(?Send)]
pub trait AuthGateway {
    /// Sign in with email and password
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, GatewayError>;

    /// Create an account; the provider signs the new user in
    async fn create_account(&self, email: &str, password: &str) -> Result<User, GatewayError>;

    /// Set the display name of the signed-in user
    async fn update_profile(&self, display_name: &str) -> Result<User, GatewayError>;

    /// End the provider session
    async fn sign_out(&self) -> Result<(), GatewayError>;

    /// Current-user observable, read at this instant
    fn current_user(&self) -> Option<User>;
}

/// Local cache of provider documents tied to a session
#[async_trait(?Send)]
pub trait DocumentCache {
    /// Purge every cached document of the prior session
    async fn clear(&self) -> Result<(), GatewayError>;
}

/// Result of the create-then-name registration intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// Account created and named
    Complete(User),
    /// Account created, but the display name could not be set
    Unnamed { user: User, reason: GatewayError },
}

impl SignUpOutcome {
    pub fn user(&self) -> &User {
        match self {
            SignUpOutcome::Complete(user) | SignUpOutcome::Unnamed { user, .. } => user,
        }
    }
}

/// Create an account and set its display name as one intent
///
/// Failure to create the account is an error. Failure of the naming step is
/// not: the account exists, so it is reported as [`SignUpOutcome::Unnamed`]
/// and left for the user to correct.
pub async fn sign_up<G>(
    gateway: &G,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<SignUpOutcome, GatewayError>
where
    G: AuthGateway + ?Sized,
{
    let user = gateway.create_account(email, password).await?;

    match gateway.update_profile(full_name).await {
        Ok(named) => Ok(SignUpOutcome::Complete(named)),
        Err(reason) => Ok(SignUpOutcome::Unnamed { user, reason }),
    }
}
