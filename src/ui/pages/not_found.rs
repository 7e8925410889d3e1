//! Fallback for unknown paths, shown inside the app shell

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::app_bar::{AppBar, require_session};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    require_session();
    let location = use_location();

    view! {
        <div class="h-screen flex flex-col bg-theme-primary">
            <AppBar />
            <main class="flex-1 flex flex-col items-center justify-center gap-4 p-4 text-center">
                <p class="text-lg text-theme-primary">
                    "Nothing lives at "
                    <code class="font-mono">{move || location.pathname.get()}</code>
                </p>
                <A href="/" attr:class="text-accent-primary hover:text-accent-primary-hover font-medium">
                    "Back to Voypost"
                </A>
            </main>
        </div>
    }
}
