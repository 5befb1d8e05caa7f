use leptos::prelude::*;

/// Circular loading indicator shown while a request is in flight.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-10 w-10 animate-spin rounded-full border-4 border-neutral-600 border-t-amber-400"
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}
