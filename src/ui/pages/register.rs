//! Register page component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::side_miniature::AuthLayout;
use crate::ui::auth::{AuthState, RegisterForm, use_auth_context};

/// Register page component
#[component]
pub fn RegisterPage() -> impl IntoView {
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
            <RegisterForm />
        </AuthLayout>
    }
}
