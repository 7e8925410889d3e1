use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::{AuthState, UserMenu, use_auth_context};
use crate::ui::icon::{Icon, icons};

/// Top bar with the product title and the user menu
#[component]
pub fn AppBar() -> impl IntoView {
    view! {
        <header class="bg-accent-primary text-white shadow">
            <div class="flex items-center h-16 px-4 gap-4">
                <button
                    type="button"
                    aria-label="menu"
                    class="p-2 rounded-lg hover:bg-white/10 transition-colors"
                >
                    <Icon name=icons::MENU class="h-6 w-6" />
                </button>
                <A href="/" attr:class="flex-1 text-xl font-semibold">"Voypost"</A>
                <UserMenu />
            </div>
        </header>
    }
}

/// Send visitors without a session to the login page
pub fn require_session() {
    let auth = use_auth_context();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if auth.state.get() == AuthState::Unauthenticated {
            navigate("/login", Default::default());
        }
    });
}
