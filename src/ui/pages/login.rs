//! Login page component
//!
//! A standalone page for user login; signed-in visitors are sent home.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::side_miniature::AuthLayout;
use crate::ui::auth::{AuthState, LoginForm, use_auth_context};

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();

    // Redirect if already authenticated
    Effect::new(move |_| {
        if matches!(auth.state.get(), AuthState::Authenticated(_)) {
            navigate("/", Default::default());
        }
    });

    view! {
        <AuthLayout>
            <LoginForm />
        </AuthLayout>
    }
}
