//! Inline banners for messages that belong to one form rather than the toast
//! stack. Messages must be safe to render and never include secrets.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    pub fn class(self) -> &'static str {
        match self {
            AlertKind::Error => {
                "rounded-lg border border-red-400 bg-red-900/30 px-3 py-2 text-sm text-red-200"
            }
            AlertKind::Success => {
                "rounded-lg border border-emerald-400 bg-emerald-900/30 px-3 py-2 text-sm text-emerald-200"
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod view {
    use super::AlertKind;
    use leptos::prelude::*;

    /// Renders a styled alert banner.
    #[component]
    pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
        view! { <div class=kind.class() role="alert">{message}</div> }
    }
}

#[cfg(target_arch = "wasm32")]
pub use view::Alert;

#[cfg(test)]
mod tests {
    use super::AlertKind;

    #[test]
    fn kinds_use_distinct_palettes() {
        assert!(AlertKind::Error.class().contains("text-red-200"));
        assert!(AlertKind::Success.class().contains("text-emerald-200"));
        assert_ne!(AlertKind::Error.class(), AlertKind::Success.class());
    }
}
