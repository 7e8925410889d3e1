//! Alert context and banner
//!
//! One alert slot per app root, provided through Leptos context rather than a
//! global. The banner renders the latest alert and hides it after a delay,
//! unless a newer alert replaced it in the meantime.

use leptos::prelude::*;

use crate::core::{AlertRelay, AlertSink, AlertState, Severity};
use crate::ui::icon::{Icon, icons};

/// Reactive handle to the alert slot
#[derive(Clone, Copy)]
pub struct AlertContext {
    relay: RwSignal<AlertRelay>,
}

impl AlertContext {
    pub fn new() -> Self {
        Self {
            relay: RwSignal::new(AlertRelay::new()),
        }
    }

    /// Current alert (tracked)
    pub fn current(&self) -> AlertState {
        self.relay.with(|relay| relay.current().clone())
    }

    /// Generation of the current alert (tracked)
    pub fn generation(&self) -> u64 {
        self.relay.with(AlertRelay::generation)
    }

    pub fn dismiss(&self) {
        self.relay.update(AlertRelay::dismiss);
    }

    /// Hide the alert if it is still the one stored under `generation`
    pub fn dismiss_if_current(&self, generation: u64) {
        self.relay.update(|relay| {
            relay.dismiss_if_current(generation);
        });
    }
}

impl Default for AlertContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertSink for AlertContext {
    fn emit(&self, message: &str, is_success: bool) {
        self.relay.update(|relay| {
            relay.emit(message, is_success);
        });
    }
}

/// Provide a fresh alert slot to the component tree
pub fn provide_alert_context() -> AlertContext {
    let ctx = AlertContext::new();
    provide_context(ctx);
    ctx
}

/// Get the alert slot from the component tree
pub fn use_alert_context() -> AlertContext {
    expect_context::<AlertContext>()
}

/// Banner showing the current alert
#[component]
pub fn AlertBanner(
    /// Auto-hide delay in milliseconds
    #[prop(into)]
    hide_after_ms: Signal<u32>,
) -> impl IntoView {
    let alerts = use_alert_context();

    // Auto-hide; a timer armed for a replaced alert does nothing
    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        Effect::new(move |_| {
            let generation = alerts.generation();
            if generation == 0 || !alerts.relay.with_untracked(|r| r.current().visible) {
                return;
            }
            let delay = hide_after_ms.get_untracked();
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                alerts.dismiss_if_current(generation);
            });
        });
    }
    #[cfg(feature = "ssr")]
    let _ = hide_after_ms;

    view! {
        {move || {
            let alert = alerts.current();
            alert.visible.then(|| {
                let (container_class, icon) = match alert.severity {
                    Severity::Info => (
                        "bg-blue-500/10 border-blue-500/30 text-blue-700",
                        icons::INFO,
                    ),
                    Severity::Error => (
                        "bg-red-500/10 border-red-500/30 text-red-700",
                        icons::ALERT_CIRCLE,
                    ),
                };
                view! {
                    <div
                        role="alert"
                        data-severity=alert.severity.as_str()
                        class=format!(
                            "fixed bottom-4 left-1/2 -translate-x-1/2 z-50 flex items-center gap-3 px-4 py-3 rounded-lg border shadow-lg {}",
                            container_class
                        )
                    >
                        <Icon name=icon class="h-5 w-5" />
                        <span class="text-sm">{alert.message}</span>
                        <button
                            type="button"
                            class="ml-2 opacity-70 hover:opacity-100"
                            on:click=move |_| alerts.dismiss()
                        >
                            <Icon name=icons::X class="h-4 w-4" />
                        </button>
                    </div>
                }
            })
        }}
    }
}
