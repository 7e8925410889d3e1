//! Auth API endpoints
//!
//! - GET /api/auth/config - Public identity provider settings for the browser

use axum::{Json, Router, extract::State, routing::get};
use std::sync::Arc;

use super::identity::ProviderSettings;

/// Auth API state
#[derive(Clone)]
pub struct AuthApiState {
    pub settings: ProviderSettings,
}

/// Create the auth API router
pub fn auth_api_router(state: AuthApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/api/auth/config", get(config_handler))
        .with_state(state)
}

async fn config_handler(State(state): State<Arc<AuthApiState>>) -> Json<ProviderSettings> {
    Json(state.settings.clone())
}
