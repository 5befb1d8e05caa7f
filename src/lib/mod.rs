//! Shared frontend utilities for API access, configuration, errors, logging
//! and build metadata.
//!
//! ## Request Flow
//!
//! 1. **Session check:** On mount the app calls `/api/v1/user/auth-status` with
//!    cookies. The response carries the signed-in user and a CSRF token.
//! 2. **Authenticated calls:** Every other call sends the token in
//!    `X-Csrf-Token` through [`api::ApiClient`].
//! 3. **Token rotation:** A `403` means the token is missing or stale. The client
//!    re-runs the session check once and resends the same request once.
//!
//! Views never talk to `gloo-net` directly; they go through the feature clients,
//! which keeps the retry policy in one place. None of these helpers log secrets.

pub(crate) mod api;
#[cfg(target_arch = "wasm32")]
pub(crate) mod browser;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
#[cfg(target_arch = "wasm32")]
pub(crate) mod http;
pub(crate) mod telemetry;

pub(crate) use api::{ApiClient, ApiRequest, CsrfSource, Transport};
pub(crate) use errors::AppError;
