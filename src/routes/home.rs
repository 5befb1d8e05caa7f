//! Landing route. Signed-in users are sent to the blog list once verified and
//! to the verification flow otherwise.

use crate::{
    components::{AppShell, Spinner},
    features::session::state::use_session,
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if session.is_loading.get() {
            return;
        }
        if let Some(user) = session.user.get() {
            let target = if user.verified {
                paths::BLOGS
            } else {
                paths::VERIFY
            };
            navigate(target, Default::default());
        }
    });

    view! {
        <AppShell>
            {move || {
                if session.is_loading.get() || session.is_logged_in.get() {
                    view! {
                        <div class="flex justify-center items-center min-h-[50vh]">
                            <Spinner />
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="max-w-lg mx-auto text-center space-y-3">
                            <h1 class="text-3xl font-bold text-amber-400">"Social Scribe"</h1>
                            <p class="text-gray-300">
                                "Share your Hashnode posts on X and LinkedIn. Sign in to continue."
                            </p>
                        </div>
                    }
                    .into_any()
                }
            }}
        </AppShell>
    }
}
