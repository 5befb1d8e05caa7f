use crate::{components::Spinner, features::session::state::use_session, routes::paths};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Renders children only for a signed-in user. UX-only; the backend enforces
/// access on every call.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !session.is_loading.get() && !session.is_logged_in.get() {
            navigate(paths::HOME, Default::default());
        }
    });

    view! {
        {move || {
            if session.is_loading.get() {
                view! {
                    <div class="flex justify-center items-center min-h-[50vh]">
                        <Spinner />
                    </div>
                }
                .into_any()
            } else if session.is_logged_in.get() {
                children().into_any()
            } else {
                ().into_any()
            }
        }}
    }
}
