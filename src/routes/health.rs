use crate::{app_lib::build_info, components::AppShell};
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    let commit = build_info::git_commit_hash();
    let version = build_info::version();

    view! {
        <AppShell>
            <div class="flex justify-center">
                <div class="block max-w-[38rem] rounded-lg border border-neutral-600 bg-neutral-700">
                    <div class="border-b border-neutral-600 px-6 py-3 font-semibold">
                        "Build Version"
                    </div>
                    <div class="p-6">
                        <pre class="text-center">{format!("{version} ({commit})")}</pre>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
