//! Minimal 404 page for unknown routes.

use crate::{app_lib::browser, components::AppShell, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders the not-found page inside the app shell.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <h1 class="text-9xl font-black text-neutral-700 select-none">"404"</h1>
                <p class="mt-2 text-2xl font-bold">"Page not found"</p>
                <div class="mt-6 flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href=paths::HOME
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800"
                    >
                        "Go Home"
                    </A>
                    <button
                        type="button"
                        on:click=move |_| browser::history_back()
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-gray-200 border border-neutral-600 rounded-lg hover:bg-neutral-700"
                    >
                        "Go Back"
                    </button>
                </div>
            </div>
        </AppShell>
    }
}
