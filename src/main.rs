#[cfg(target_arch = "wasm32")]
mod app;
// Request and state logic builds on every target so it can be unit tested
// natively. Its only callers are the wasm32 views.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod components;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::app::App;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    app_lib::telemetry::init();
    tracing::info!(
        version = app_lib::build_info::version(),
        commit = app_lib::build_info::git_commit_hash(),
        "starting social scribe web"
    );
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
