//! Session check against the backend. This is the only call that does not
//! need a CSRF token; it is what issues one.

use crate::{
    app_lib::{ApiRequest, AppError, Transport},
    features::session::types::AuthStatus,
};
use tracing::debug;

pub const AUTH_STATUS_PATH: &str = "/api/v1/user/auth-status";

/// Fetches the current session and a fresh CSRF token.
/// A `401` is a normal signed-out answer, not an error.
pub async fn check_logged_in(transport: &impl Transport) -> Result<AuthStatus, AppError> {
    let response = transport
        .send(&ApiRequest::get(AUTH_STATUS_PATH), None)
        .await?;

    if response.status == 401 {
        debug!("no active session");
        return Ok(AuthStatus::signed_out());
    }
    if !response.ok() {
        return Err(response.into_error("Unable to check your session."));
    }

    response.json()
}

#[cfg(test)]
mod tests {
    use super::{AUTH_STATUS_PATH, check_logged_in};
    use crate::app_lib::{AppError, api::testing::ScriptedTransport};

    #[tokio::test]
    async fn returns_user_and_token() {
        let transport = ScriptedTransport::new().respond(
            200,
            r#"{"logged_in":true,"user":{"username":"a@b.c","email_verified":true},"csrf_token":"tok"}"#,
        );

        let status = check_logged_in(&transport).await.expect("status");

        assert!(status.logged_in);
        assert_eq!(status.csrf_token.as_deref(), Some("tok"));
        let sent = transport.sent();
        assert_eq!(sent[0].request.path, AUTH_STATUS_PATH);
        assert_eq!(sent[0].csrf_token, None);
    }

    #[tokio::test]
    async fn unauthorized_means_signed_out() {
        let transport = ScriptedTransport::new().respond(
            401,
            r#"{"success": false, "reason": "Unauthorized: Missing session token"}"#,
        );

        let status = check_logged_in(&transport).await.expect("status");

        assert!(!status.logged_in);
        assert!(status.active_user().is_none());
    }

    #[tokio::test]
    async fn server_errors_surface_reason() {
        let transport = ScriptedTransport::new()
            .respond(429, r#"{"success": false, "reason": "Too Many Requests"}"#);

        let err = check_logged_in(&transport).await.expect_err("error");

        assert_eq!(
            err,
            AppError::Http {
                status: 429,
                message: "Too Many Requests".to_string(),
            }
        );
    }
}
