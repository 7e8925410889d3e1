use leptos::prelude::*;

/// Decorative image panel beside the auth forms, hidden on small screens
#[component]
pub fn SideMiniature() -> impl IntoView {
    view! {
        <div
            class="hidden sm:block sm:w-1/3 md:w-7/12 bg-cover bg-center bg-no-repeat"
            style="background-image: url('/images/side.png');"
            aria-hidden="true"
        ></div>
    }
}

/// Two-column layout shared by the login and register pages
#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex">
            <SideMiniature />
            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
                    {children()}
                </div>
            </main>
        </div>
    }
}
