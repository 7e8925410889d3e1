//! Login form component
//!
//! Email and password sign-in backed by a [`FormController`].

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::context::use_auth_context;
use crate::core::{Field, FormController, FormKind};
use crate::ui::alert::use_alert_context;
use crate::ui::common::{FormField, PasswordField, SubmitButton};

/// Login form component
#[component]
pub fn LoginForm(
    /// Path to open once signed in
    #[prop(default = "/")]
    redirect_to: &'static str,
) -> impl IntoView {
    let auth = use_auth_context();
    let alerts = use_alert_context();
    let form = RwSignal::new(FormController::new(FormKind::Login));

    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        auth.submit_form(form, alerts, move || {
            navigate(redirect_to, Default::default())
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6" novalidate>
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">"Sign in"</h2>
            </div>

            <FormField
                form=form
                field=Field::Email
                input_type="email"
                autocomplete="email"
                placeholder="you@example.com"
            />

            <PasswordField
                form=form
                field=Field::Password
                placeholder="Enter your password"
            />

            <SubmitButton form=form label="LOGIN" pending_label="Signing in..." />

            <div class="text-center text-sm text-theme-secondary">
                "Don’t have an account? "
                <A href="/register" attr:class="text-accent-primary hover:text-accent-primary-hover font-medium">
                    "REGISTER"
                </A>
            </div>
        </form>
    }
}
