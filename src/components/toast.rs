//! Toast notifications. The queue is plain data so ordering rules are unit
//! tested; the provider and stack render it and expire entries on a timer.
//! Toast text is user-facing and must never contain secrets.

/// Number of toasts kept on screen; older ones are dropped first.
pub const MAX_VISIBLE: usize = 5;
/// Time a toast stays visible before it dismisses itself.
pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    /// Appends a toast and returns its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use view::{ToastProvider, use_toasts};

#[cfg(target_arch = "wasm32")]
mod view {
    use super::{TOAST_TTL_MS, ToastKind, ToastQueue};
    use gloo_timers::callback::Timeout;
    use leptos::prelude::*;

    #[derive(Clone, Copy)]
    pub struct Toasts {
        queue: RwSignal<ToastQueue>,
    }

    impl Toasts {
        pub fn success(&self, message: impl Into<String>) {
            self.show(ToastKind::Success, message.into());
        }

        pub fn error(&self, message: impl Into<String>) {
            self.show(ToastKind::Error, message.into());
        }

        fn show(&self, kind: ToastKind, message: String) {
            let queue = self.queue;
            let Some(id) = queue.try_update(|queue| queue.push(kind, message)) else {
                return;
            };
            Timeout::new(TOAST_TTL_MS, move || {
                let _ = queue.try_update(|queue| queue.dismiss(id));
            })
            .forget();
        }

        fn dismiss(&self, id: u64) {
            let _ = self.queue.try_update(|queue| queue.dismiss(id));
        }
    }

    /// Provides the toast context and renders the stack above the page.
    #[component]
    pub fn ToastProvider(children: Children) -> impl IntoView {
        let toasts = Toasts {
            queue: RwSignal::new(ToastQueue::default()),
        };
        provide_context(toasts);

        view! {
            {children()}
            <ToastStack toasts=toasts />
        }
    }

    #[component]
    fn ToastStack(toasts: Toasts) -> impl IntoView {
        view! {
            <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 w-80" aria-live="polite">
                <For
                    each=move || toasts.queue.with(|queue| queue.items().to_vec())
                    key=|toast| toast.id
                    children=move |toast| {
                        let class = match toast.kind {
                            ToastKind::Success => {
                                "flex items-start justify-between rounded-lg px-4 py-3 text-sm shadow-lg bg-emerald-600 text-white"
                            }
                            ToastKind::Error => {
                                "flex items-start justify-between rounded-lg px-4 py-3 text-sm shadow-lg bg-red-600 text-white"
                            }
                        };
                        let id = toast.id;
                        view! {
                            <div class=class role="status">
                                <span>{toast.message}</span>
                                <button
                                    type="button"
                                    class="ml-3 text-white/80 hover:text-white"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.dismiss(id)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        }
    }

    /// Returns the toast context; without a provider toasts are dropped.
    pub fn use_toasts() -> Toasts {
        use_context::<Toasts>().unwrap_or_else(|| Toasts {
            queue: RwSignal::new(ToastQueue::default()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_VISIBLE, ToastKind, ToastQueue};

    #[test]
    fn ids_are_monotonic_and_order_is_kept() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "Log out successful");
        let second = queue.push(ToastKind::Error, "Error logging out");

        assert!(second > first);
        let messages: Vec<_> = queue.items().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["Log out successful", "Error logging out"]);
    }

    #[test]
    fn dismiss_removes_only_matching_toast() {
        let mut queue = ToastQueue::default();
        let keep = queue.push(ToastKind::Success, "keep");
        let drop = queue.push(ToastKind::Success, "drop");

        queue.dismiss(drop);
        queue.dismiss(999);

        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, keep);
    }

    #[test]
    fn oldest_toasts_are_dropped_past_the_limit() {
        let mut queue = ToastQueue::default();
        for n in 0..(MAX_VISIBLE + 2) {
            queue.push(ToastKind::Error, format!("toast {n}"));
        }

        assert_eq!(queue.items().len(), MAX_VISIBLE);
        assert_eq!(queue.items()[0].message, "toast 2");
        assert_eq!(
            queue.items()[MAX_VISIBLE - 1].message,
            format!("toast {}", MAX_VISIBLE + 1)
        );
    }

    #[test]
    fn ids_are_not_reused_after_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "a");
        queue.dismiss(first);
        let second = queue.push(ToastKind::Success, "b");
        assert_ne!(first, second);
    }
}
