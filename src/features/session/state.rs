//! Session state and context for the frontend. The provider runs the session
//! check once on mount and keeps the user and CSRF token in signals. The
//! context doubles as the CSRF source for API calls, so a `403` refresh also
//! updates what views render. Cookies stay `HttpOnly`; only the token and
//! non-sensitive user metadata live in memory.

use crate::{
    app_lib::{ApiClient, AppError, CsrfSource, http::BrowserTransport},
    features::session::{
        client,
        types::{AuthStatus, SessionUser},
    },
};
use leptos::{prelude::*, task::spawn_local};
use tracing::{info, warn};

/// API client wired to the browser transport and the session's CSRF token.
pub type BrowserApi = ApiClient<BrowserTransport, SessionContext>;

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct SessionContext {
    pub user: RwSignal<Option<SessionUser>>,
    pub is_loading: RwSignal<bool>,
    pub is_logged_in: Signal<bool>,
    csrf_token: RwSignal<Option<String>>,
}

impl SessionContext {
    fn new() -> Self {
        let user = RwSignal::new(None);
        let is_logged_in = Signal::derive(move || user.get().is_some());
        Self {
            user,
            is_loading: RwSignal::new(true),
            is_logged_in,
            csrf_token: RwSignal::new(None),
        }
    }

    /// Replaces the user and token with a session check result.
    pub fn apply(&self, status: AuthStatus) {
        self.user.set(status.active_user().cloned());
        self.csrf_token.set(status.csrf_token);
    }

    /// Updates the in-memory user after a verification step succeeds.
    pub fn set_user(&self, user: SessionUser) {
        self.user.set(Some(user));
    }

    pub fn api(&self) -> BrowserApi {
        ApiClient::new(BrowserTransport::default(), *self)
    }

    async fn hydrate(self) {
        match client::check_logged_in(&BrowserTransport::default()).await {
            Ok(status) => {
                info!(logged_in = status.logged_in, "session hydrated");
                self.apply(status);
            }
            Err(err) => warn!(error = %err, "session check failed"),
        }
        self.is_loading.set(false);
    }
}

impl CsrfSource for SessionContext {
    fn current(&self) -> Option<String> {
        self.csrf_token.get_untracked()
    }

    async fn refresh(&self) -> Result<Option<String>, AppError> {
        let status = client::check_logged_in(&BrowserTransport::default()).await?;
        let token = status.csrf_token.clone();
        self.apply(status);
        Ok(token)
    }
}

/// Provides the session context and hydrates it once on mount.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = SessionContext::new();
    provide_context(session);
    spawn_local(session.hydrate());

    view! { {children()} }
}

/// Returns the current session context or a fallback empty context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        let session = SessionContext::new();
        session.is_loading.set(false);
        session
    })
}
