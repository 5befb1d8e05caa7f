//! Blog list with category tabs plus the logout and account deletion dialogs.
//! The active tab lives in the `tab` query parameter so reloads keep it.

use crate::{
    app_lib::browser,
    components::{AppShell, Button, ButtonVariant, Modal, Spinner, use_toasts},
    features::{
        account::client::{self as account, AccountOutcome},
        blogs::{
            client,
            types::{BlogCategory, BlogSummary, TabClick},
        },
        session::state::use_session,
    },
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

const EMPTY_LIST: &str = "Dude, there are no blogs here!";

#[component]
pub fn BlogsPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let query = use_query_map();
    let category = Memo::new(move |_| {
        query.with(|params| BlogCategory::from_query(params.get("tab").as_deref()))
    });

    let (blogs, set_blogs) = signal(Vec::<BlogSummary>::new());
    let (logout_open, set_logout_open) = signal(false);
    let (delete_open, set_delete_open) = signal(false);
    let (password, set_password) = signal(String::new());

    let fetch_action = Action::new_local(move |category: &BlogCategory| {
        let category = *category;
        async move { client::fetch_blogs(&session.api(), category).await }
    });

    let logout_action = Action::new_local(move |_: &()| async move {
        account::logout(&session.api()).await
    });

    let delete_action = Action::new_local(move |password: &String| {
        let password = password.clone();
        async move { account::delete_account(&session.api(), &password).await }
    });

    Effect::new(move |_| {
        fetch_action.dispatch(category.get());
    });

    Effect::new(move |_| {
        if let Some(result) = fetch_action.value().get() {
            match result {
                Ok(list) => set_blogs.set(list),
                Err(err) => {
                    toasts.error(client::toast_message(&err));
                    set_blogs.set(Vec::new());
                }
            }
        }
    });

    let report = move |outcome: AccountOutcome| {
        if outcome.is_success() {
            toasts.success(outcome.message());
        } else {
            toasts.error(outcome.message());
        }
        if let Some(delay) = outcome.reload_delay_ms() {
            browser::reload_after(delay);
        }
    };

    Effect::new(move |_| {
        if let Some(outcome) = logout_action.value().get() {
            report(outcome);
            set_logout_open.set(false);
        }
    });

    Effect::new(move |_| {
        if let Some(outcome) = delete_action.value().get() {
            report(outcome);
            if outcome.closes_dialog() {
                set_delete_open.set(false);
                set_password.set(String::new());
            }
        }
    });

    let on_tab = move |tab: BlogCategory| match category.get_untracked().click(tab) {
        TabClick::Navigate(tab) => navigate(
            &format!("{}?tab={}", paths::BLOGS, tab.as_str()),
            Default::default(),
        ),
        TabClick::Refresh(tab) => {
            fetch_action.dispatch(tab);
        }
    };

    view! {
        <AppShell>
            <div class="flex flex-wrap items-center justify-center gap-4">
                <div class="flex rounded-lg border border-neutral-600 overflow-hidden" role="tablist">
                    {BlogCategory::ALL
                        .into_iter()
                        .map(|tab| {
                            let on_tab = on_tab.clone();
                            view! {
                                <button
                                    type="button"
                                    role="tab"
                                    class="px-4 py-2 text-sm font-medium transition-colors"
                                    class:bg-amber-500=move || category.get() == tab
                                    class:text-black=move || category.get() == tab
                                    class:text-gray-300=move || category.get() != tab
                                    aria-selected=move || (category.get() == tab).to_string()
                                    on:click=move |_| on_tab(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <Button variant=ButtonVariant::Danger on:click=move |_| set_logout_open.set(true)>
                    "Log Out"
                </Button>
                <Button variant=ButtonVariant::Danger on:click=move |_| set_delete_open.set(true)>
                    "Delete Account"
                </Button>
            </div>

            {move || {
                if fetch_action.pending().get() {
                    view! {
                        <div class="flex justify-center items-center min-h-[50vh]">
                            <Spinner />
                        </div>
                    }
                    .into_any()
                } else if blogs.with(Vec::is_empty) {
                    view! {
                        <div class="flex justify-center items-center min-h-[50vh] text-white">
                            <p>{EMPTY_LIST}</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <BlogGrid blogs=blogs.get() /> }.into_any()
                }
            }}

            <Modal
                open=logout_open
                on_close=move |_| set_logout_open.set(false)
                title="Confirm Logout"
            >
                <p class="mt-2 text-gray-300">"Are you sure you want to log out?"</p>
                <div class="mt-6 flex justify-end gap-2">
                    <Button on:click=move |_| set_logout_open.set(false)>"Cancel"</Button>
                    <Button
                        variant=ButtonVariant::Danger
                        disabled=logout_action.pending()
                        on:click=move |_| {
                            logout_action.dispatch(());
                        }
                    >
                        "Yes, Log Out"
                    </Button>
                </div>
            </Modal>

            <Modal
                open=delete_open
                on_close=move |_| set_delete_open.set(false)
                title="Confirm Account Deletion"
            >
                <p class="mt-2 text-gray-300">
                    "Are you sure you want to delete your account? This action is irreversible, and all your data will be permanently erased."
                </p>
                <label class="block mt-4 mb-1 text-sm font-medium" for="delete_password">
                    "Enter Password"
                </label>
                <input
                    id="delete_password"
                    type="password"
                    autocomplete="current-password"
                    class="w-full rounded-md border border-red-400 bg-neutral-700 p-2.5 text-sm text-white focus:border-red-400 focus:ring-red-400"
                    prop:value=move || password.get()
                    on:input=move |event| set_password.set(event_target_value(&event))
                />
                <div class="mt-6 flex justify-end gap-2">
                    <Button
                        variant=ButtonVariant::Secondary
                        on:click=move |_| set_delete_open.set(false)
                    >
                        "Cancel"
                    </Button>
                    <Button
                        variant=ButtonVariant::Danger
                        disabled=delete_action.pending()
                        on:click=move |_| {
                            delete_action.dispatch(password.get_untracked());
                        }
                    >
                        "Yes, Delete"
                    </Button>
                </div>
            </Modal>
        </AppShell>
    }
}

#[component]
fn BlogGrid(blogs: Vec<BlogSummary>) -> impl IntoView {
    view! {
        <div class="mt-8 grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
            {blogs.into_iter().map(|blog| view! { <BlogCard blog=blog /> }).collect_view()}
        </div>
    }
}

#[component]
fn BlogCard(blog: BlogSummary) -> impl IntoView {
    let href = blog.safe_url().to_string();
    let shared = [
        (blog.shared_on_x, "X"),
        (blog.shared_on_linkedin, "LinkedIn"),
    ]
    .into_iter()
    .filter_map(|(done, name)| done.then_some(name))
    .collect::<Vec<_>>();

    view! {
        <article class="flex flex-col overflow-hidden rounded-lg bg-neutral-700 shadow">
            {blog.cover_image.map(|src| {
                view! { <img src=src alt="" class="h-40 w-full object-cover" /> }
            })}
            <div class="flex flex-1 flex-col p-4 space-y-2">
                <a
                    href=href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-lg font-semibold text-white hover:text-amber-400"
                >
                    {blog.title}
                </a>
                {blog.brief.map(|brief| view! { <p class="text-sm text-gray-300">{brief}</p> })}
                <div class="mt-auto flex items-center justify-between text-xs text-gray-400">
                    <span>{blog.published_at.unwrap_or_default()}</span>
                    <span>
                        {if shared.is_empty() {
                            "Not shared yet".to_string()
                        } else {
                            format!("Shared on {}", shared.join(", "))
                        }}
                    </span>
                </div>
            </div>
        </article>
    }
}
