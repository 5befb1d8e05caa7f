mod alert;
#[cfg(target_arch = "wasm32")]
mod button;
#[cfg(target_arch = "wasm32")]
mod modal;
#[cfg(target_arch = "wasm32")]
mod spinner;

#[cfg(target_arch = "wasm32")]
pub(crate) use alert::{Alert, AlertKind};
#[cfg(target_arch = "wasm32")]
pub(crate) use button::{Button, ButtonVariant};
#[cfg(target_arch = "wasm32")]
pub(crate) use modal::Modal;
#[cfg(target_arch = "wasm32")]
pub(crate) use spinner::Spinner;
