//! Home screen
//!
//! App bar with the product title and the user menu. Visitors without a
//! session are sent to the login page.

use leptos::prelude::*;

use super::app_bar::{AppBar, require_session};

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    require_session();

    view! {
        <div class="h-screen flex flex-col bg-theme-primary">
            <AppBar />
        </div>
    }
}
