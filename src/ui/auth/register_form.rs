//! Register form component
//!
//! Full name, email, password and confirmation. On submit the account is
//! created and then named; see [`crate::core::auth::sign_up`].

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::context::use_auth_context;
use crate::core::{Field, FormController, FormKind};
use crate::ui::alert::use_alert_context;
use crate::ui::common::{FormField, PasswordField, SubmitButton};

/// Register form component
#[component]
pub fn RegisterForm(
    /// Path to open once the account exists
    #[prop(default = "/")]
    redirect_to: &'static str,
) -> impl IntoView {
    let auth = use_auth_context();
    let alerts = use_alert_context();
    let form = RwSignal::new(FormController::new(FormKind::Registration));

    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        auth.submit_form(form, alerts, move || {
            navigate(redirect_to, Default::default())
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-5" novalidate>
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">"Create account"</h2>
            </div>

            <FormField
                form=form
                field=Field::FullName
                autocomplete="name"
                placeholder="John Smith"
            />

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
                autocomplete="new-password"
                placeholder="At least 12 characters"
            />

            <PasswordField
                form=form
                field=Field::RepeatPassword
                autocomplete="new-password"
                placeholder="Repeat your password"
            />

            <SubmitButton form=form label="REGISTER" pending_label="Creating account..." />

            <div class="text-center text-sm text-theme-secondary">
                "Already have account? "
                <A href="/login" attr:class="text-accent-primary hover:text-accent-primary-hover font-medium">
                    "LOGIN"
                </A>
            </div>
        </form>
    }
}
