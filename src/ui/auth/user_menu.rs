//! User menu component
//!
//! Avatar button in the app bar opening a dropdown with the Logout action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::{AuthState, use_auth_context};
use crate::core::auth::{User, logout};
use crate::ui::alert::use_alert_context;
use crate::ui::icon::{Icon, icons};

/// User menu component for the app bar
#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = use_auth_context();
    let alerts = use_alert_context();

    // Dropdown open state
    let menu_open = RwSignal::new(false);

    let handle_logout = move |_| {
        menu_open.set(false);
        let gateway = auth.gateway();
        let cache = auth.document_cache();
        spawn_local(async move {
            logout(&gateway, &cache, &alerts).await;
        });
    };

    view! {
        <div class="relative">
            {move || {
                match auth.state.get() {
                    AuthState::Loading => {
                        view! {
                            <div class="w-8 h-8 rounded-full bg-theme-secondary animate-pulse"></div>
                        }.into_any()
                    }
                    AuthState::Unauthenticated => {
                        // Guarded routes redirect away before this is visible
                        ().into_any()
                    }
                    AuthState::Authenticated(user) => {
                        view! {
                            <div class="relative">
                                <button
                                    aria-label="account menu"
                                    title="Open settings"
                                    class="flex items-center gap-2 p-1 rounded-lg hover:bg-white/10 transition-colors"
                                    on:click=move |_| menu_open.update(|v| *v = !*v)
                                >
                                    <UserAvatar user=user.clone() size=32 />
                                </button>

                                {move || {
                                    menu_open.get().then(|| view! {
                                        <div
                                            role="menu"
                                            class="absolute right-0 mt-2 w-48 bg-theme-primary rounded-lg shadow-lg border border-theme py-1 z-50"
                                        >
                                            <button
                                                role="menuitem"
                                                class="w-full px-4 py-2 text-sm text-left text-theme-primary
                                                       hover:bg-theme-secondary transition-colors
                                                       flex items-center gap-2"
                                                on:click=handle_logout
                                            >
                                                <Icon name=icons::LOGOUT class="h-4 w-4" />
                                                "Logout"
                                            </button>
                                        </div>
                                    })
                                }}
                            </div>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}

/// User avatar showing the display name initials
#[component]
pub fn UserAvatar(
    /// User data
    user: User,
    /// Avatar size in pixels
    #[prop(default = 32)]
    size: u32,
) -> impl IntoView {
    let initials = user.avatar_label();

    let size_style = format!(
        "width: {}px; height: {}px; min-width: {}px; min-height: {}px;",
        size, size, size, size
    );
    let font_size = if size >= 40 { "text-lg" } else { "text-sm" };

    // Generate a consistent color from the uid
    let hash = user
        .uid
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_add(b as u32));
    let colors = [
        "bg-blue-500",
        "bg-green-500",
        "bg-yellow-500",
        "bg-red-500",
        "bg-purple-500",
        "bg-pink-500",
        "bg-indigo-500",
        "bg-teal-500",
    ];
    let color = colors[(hash as usize) % colors.len()];

    view! {
        <div
            class=format!("{} rounded-full flex items-center justify-center text-white font-medium {}", color, font_size)
            style=size_style
            title=user.display_name.clone().unwrap_or_else(|| user.email.clone())
        >
            {initials}
        </div>
    }
}
