//! Session payloads returned by the session check. The CSRF token is sensitive
//! and must never be logged or rendered.

use serde::{Deserialize, Serialize};

/// Signed-in account as reported by the backend. Provider flags default to
/// `false` when the backend omits them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Account email; doubles as the login name.
    pub username: String,
    #[serde(default)]
    pub x_verified: bool,
    #[serde(default)]
    pub linkedin_verified: bool,
    #[serde(default)]
    pub hashnode_verified: bool,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthStatus {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub csrf_token: Option<String>,
}

impl AuthStatus {
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// The user, only when the backend also reports the session as live.
    pub fn active_user(&self) -> Option<&SessionUser> {
        self.user.as_ref().filter(|_| self.logged_in)
    }
}
