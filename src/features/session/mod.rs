//! Session feature: the session check that issues CSRF tokens, the shared
//! session context, and the route guard. It touches security boundaries and
//! must not log token material.
//!
//! Flow Overview: the provider calls the session check on mount. Views build
//! API clients from the context, so a `403` anywhere re-runs the same check and
//! refreshes both the token and the rendered user.

pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
mod guards;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireSession;
