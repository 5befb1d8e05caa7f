//! Thin wrappers over `window` for page-level navigation. Missing browser APIs
//! degrade to no-ops instead of panicking.

use gloo_timers::callback::Timeout;
use tracing::warn;

/// Reloads the page after `delay_ms`, letting a toast show first.
pub fn reload_after(delay_ms: u32) {
    Timeout::new(delay_ms, || {
        let Some(window) = web_sys::window() else {
            return;
        };
        if window.location().reload().is_err() {
            warn!("page reload failed");
        }
    })
    .forget();
}

/// Leaves the app for a backend-driven flow such as an OAuth redirect.
pub fn navigate_external(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().set_href(url).is_err() {
        warn!("external navigation failed");
    }
}

/// Steps back in history, used by the not-found page.
pub fn history_back() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history() {
        let _ = history.back();
    }
}
