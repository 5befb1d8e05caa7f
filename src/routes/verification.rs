//! Account verification: link X or LinkedIn, prove a Hashnode blog with an API
//! key, and confirm the account email with an OTP. `Next` unlocks once
//! Hashnode, email and at least one social account are done.

use crate::{
    app_lib::{browser, config::AppConfig},
    components::{Alert, AlertKind, AppShell, Button, ButtonVariant, use_toasts},
    features::{
        session::state::use_session,
        verification::{
            client::{self, HashnodeOutcome, OtpOutcome},
            types::{OtpStatus, Provider, VerificationProgress},
        },
    },
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

const INPUT_CLASS: &str = "w-full rounded-md border border-neutral-500 bg-neutral-700 p-2 text-sm text-white placeholder-gray-400 focus:border-amber-400 focus:ring-amber-400";

#[component]
pub fn VerificationPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let initial = session.user.get_untracked().unwrap_or_default();
    let email = initial.username.clone();
    let progress = RwSignal::new(VerificationProgress::from_user(&initial));
    let (hashnode_key, set_hashnode_key) = signal(String::new());
    let (editing_key, set_editing_key) = signal(false);
    let (otp, set_otp) = signal(String::new());
    let (otp_status, set_otp_status) = signal(OtpStatus::Idle);
    let (resend_error, set_resend_error) = signal::<Option<String>>(None);

    let sync_user = move |progress: VerificationProgress| {
        if let Some(mut user) = session.user.get_untracked() {
            progress.apply_to(&mut user);
            session.set_user(user);
        }
    };

    let hashnode_action = Action::new_local(move |key: &String| {
        let key = key.clone();
        async move { client::verify_hashnode(&session.api(), &key).await }
    });

    let otp_action = Action::new_local(move |otp: &String| {
        let otp = otp.clone();
        async move { client::verify_otp(&session.api(), &otp).await }
    });

    let resend_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        async move { client::resend_otp(&session.api(), &email).await }
    });

    Effect::new(move |_| {
        if let Some(outcome) = hashnode_action.value().get() {
            if let Some(message) = outcome.toast() {
                toasts.error(message);
            }
            if outcome == HashnodeOutcome::Verified {
                progress.update(|progress| progress.hashnode = true);
                sync_user(progress.get_untracked());
                set_editing_key.set(false);
                set_hashnode_key.set(String::new());
            }
        }
    });

    Effect::new(move |_| {
        if let Some(outcome) = otp_action.value().get() {
            if let Some(message) = outcome.toast() {
                toasts.error(message);
            }
            if let Some(status) = outcome.status() {
                set_otp_status.set(status);
            }
            if outcome == OtpOutcome::Verified {
                progress.update(|progress| progress.email = true);
                sync_user(progress.get_untracked());
            }
        }
    });

    Effect::new(move |_| {
        if let Some(outcome) = resend_action.value().get() {
            if outcome.is_success() {
                toasts.success(outcome.toast());
            } else {
                toasts.error(outcome.toast());
            }
            set_resend_error.set(outcome.inline_error().map(str::to_string));
        }
    });

    let can_continue = Memo::new(move |_| progress.get().can_continue());

    Effect::new(move |_| {
        if can_continue.get() {
            sync_user(progress.get_untracked());
        }
    });

    let connect = move |provider: Provider| {
        let config = AppConfig::load();
        browser::navigate_external(&client::connect_url(&config.api_base_url, provider));
    };

    let on_next = move |_| {
        sync_user(progress.get_untracked());
        navigate(paths::BLOGS, Default::default());
    };

    let resend_email = email.clone();

    view! {
        <AppShell>
            <div class="flex justify-center">
                <div class="w-full max-w-lg rounded-xl bg-neutral-700 p-8 shadow-lg space-y-6">
                    <h1 class="text-2xl font-bold text-amber-400">"Account Verification"</h1>

                    <SocialRow
                        provider=Provider::X
                        connected=Signal::derive(move || progress.get().x)
                        on_connect=move |_| connect(Provider::X)
                    />
                    <SocialRow
                        provider=Provider::LinkedIn
                        connected=Signal::derive(move || progress.get().linkedin)
                        on_connect=move |_| connect(Provider::LinkedIn)
                    />

                    <div class="flex items-center justify-between gap-4">
                        <div class="flex items-center gap-2">
                            <span>"Hashnode API Key"</span>
                            <Show when=move || progress.get().hashnode>
                                <CheckMark />
                            </Show>
                        </div>
                        <Show
                            when=move || progress.get().hashnode && !editing_key.get()
                            fallback=move || view! {
                                <div class="flex items-center gap-3">
                                    <input
                                        type="password"
                                        autocomplete="off"
                                        class=INPUT_CLASS
                                        prop:value=move || hashnode_key.get()
                                        on:input=move |event| set_hashnode_key.set(event_target_value(&event))
                                    />
                                    <Button
                                        disabled=hashnode_action.pending()
                                        on:click=move |_| {
                                            hashnode_action.dispatch(hashnode_key.get_untracked());
                                        }
                                    >
                                        "Verify"
                                    </Button>
                                </div>
                            }
                        >
                            <Button
                                variant=ButtonVariant::Danger
                                on:click=move |_| {
                                    set_hashnode_key.set(String::new());
                                    set_editing_key.set(true);
                                }
                            >
                                "Reset Key"
                            </Button>
                        </Show>
                    </div>

                    <div>
                        <Show
                            when=move || progress.get().email
                            fallback=move || {
                                let resend_email = resend_email.clone();
                                view! {
                                    <p>"Verify your Email"</p>
                                    <div class="mt-2 flex items-center gap-3">
                                        <input
                                            type="text"
                                            inputmode="numeric"
                                            autocomplete="one-time-code"
                                            placeholder="Enter OTP"
                                            class=INPUT_CLASS
                                            prop:value=move || otp.get()
                                            on:input=move |event| set_otp.set(event_target_value(&event))
                                        />
                                        <Button
                                            disabled=otp_action.pending()
                                            on:click=move |_| {
                                                otp_action.dispatch(otp.get_untracked());
                                            }
                                        >
                                            "Verify"
                                        </Button>
                                    </div>
                                    <div class="mt-1">
                                        <Button
                                            variant=ButtonVariant::Text
                                            disabled=resend_action.pending()
                                            on:click=move |_| {
                                                resend_action.dispatch(resend_email.clone());
                                            }
                                        >
                                            "Resend OTP"
                                        </Button>
                                    </div>
                                    {move || resend_error.get().map(|reason| view! {
                                        <div class="mt-2">
                                            <Alert kind=AlertKind::Error message=reason />
                                        </div>
                                    })}
                                    {move || otp_status.get().message().map(|line| {
                                        let kind = if otp_status.get() == OtpStatus::Success {
                                            AlertKind::Success
                                        } else {
                                            AlertKind::Error
                                        };
                                        view! {
                                            <div class="mt-2">
                                                <Alert kind=kind message=line.to_string() />
                                            </div>
                                        }
                                    })}
                                }
                            }
                        >
                            <div class="flex items-center gap-3">
                                <span>{email.clone()}</span>
                                <CheckMark />
                            </div>
                        </Show>
                    </div>

                    <div class="flex justify-end">
                        <button
                            type="button"
                            class="rounded-md bg-white px-5 py-2 text-sm font-medium text-black disabled:cursor-not-allowed disabled:opacity-50"
                            disabled=move || !can_continue.get()
                            on:click=on_next
                        >
                            "Next"
                        </button>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}

#[component]
fn SocialRow(
    provider: Provider,
    #[prop(into)] connected: Signal<bool>,
    #[prop(into)] on_connect: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between">
            <div class="flex items-center gap-2">
                <span>{provider.label()}</span>
                <Show when=move || connected.get()>
                    <CheckMark />
                </Show>
            </div>
            <Show
                when=move || connected.get()
                fallback=move || view! {
                    <Button on:click=move |_| on_connect.run(())>"Connect"</Button>
                }
            >
                <span class="text-sm text-emerald-400">"Connected"</span>
            </Show>
        </div>
    }
}

#[component]
fn CheckMark() -> impl IntoView {
    view! {
        <span class="text-emerald-400" aria-label="Verified">
            "✔"
        </span>
    }
}
