//! Shared UI components exported for routes and features.

#[cfg(target_arch = "wasm32")]
pub(crate) mod layout;
pub(crate) mod toast;
pub(crate) mod ui;

#[cfg(target_arch = "wasm32")]
pub(crate) use layout::AppShell;
#[cfg(target_arch = "wasm32")]
pub(crate) use toast::{ToastProvider, use_toasts};
#[cfg(target_arch = "wasm32")]
pub(crate) use ui::{Alert, AlertKind, Button, ButtonVariant, Modal, Spinner};
