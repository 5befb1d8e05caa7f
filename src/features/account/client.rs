//! Logout and account deletion. Both end with a full page reload so every
//! piece of in-memory state is dropped along with the session.

use crate::{
    app_lib::{ApiClient, ApiRequest, CsrfSource, Transport},
    features::account::types::DeleteAccountRequest,
};
use tracing::{info, warn};

pub const LOGOUT_PATH: &str = "/api/v1/user/logout";
pub const DELETE_ACCOUNT_PATH: &str = "/api/v1/user/delete-account";

/// Result of an account action, mapped to the toast the user sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountOutcome {
    LoggedOut,
    LogoutFailed,
    PasswordRequired,
    Deleted,
    WrongPassword,
    DeleteFailed,
}

impl AccountOutcome {
    pub fn message(self) -> &'static str {
        match self {
            AccountOutcome::LoggedOut => "Log out successful",
            AccountOutcome::LogoutFailed => "Error logging out",
            AccountOutcome::PasswordRequired => "Please enter your password",
            AccountOutcome::Deleted => "Account Deleted successfully",
            AccountOutcome::WrongPassword => "Password is incorrect",
            AccountOutcome::DeleteFailed => "Error deleting account",
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, AccountOutcome::LoggedOut | AccountOutcome::Deleted)
    }

    /// Delay before the page reloads, for outcomes that end the session.
    pub fn reload_delay_ms(self) -> Option<u32> {
        match self {
            AccountOutcome::LoggedOut => Some(1_000),
            AccountOutcome::Deleted => Some(500),
            _ => None,
        }
    }

    /// The confirmation dialog stays open only when nothing was sent.
    pub fn closes_dialog(self) -> bool {
        self != AccountOutcome::PasswordRequired
    }
}

/// Ends the session on the server.
pub async fn logout<T: Transport, C: CsrfSource>(api: &ApiClient<T, C>) -> AccountOutcome {
    match api.execute(&ApiRequest::post(LOGOUT_PATH)).await {
        Ok(response) if response.ok() => {
            info!("logged out");
            AccountOutcome::LoggedOut
        }
        Ok(response) => {
            warn!(status = response.status, "logout rejected");
            AccountOutcome::LogoutFailed
        }
        Err(err) => {
            warn!(error = %err, "logout failed");
            AccountOutcome::LogoutFailed
        }
    }
}

/// Deletes the account after the user re-enters their password.
/// An empty password is rejected locally without a request.
pub async fn delete_account<T: Transport, C: CsrfSource>(
    api: &ApiClient<T, C>,
    password: &str,
) -> AccountOutcome {
    if password.is_empty() {
        return AccountOutcome::PasswordRequired;
    }

    let request =
        match ApiRequest::delete(DELETE_ACCOUNT_PATH).json(&DeleteAccountRequest { password }) {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "delete account request encoding failed");
                return AccountOutcome::DeleteFailed;
            }
        };

    match api.execute(&request).await {
        Ok(response) if response.ok() => {
            info!("account deleted");
            AccountOutcome::Deleted
        }
        Ok(response) if response.status == 401 => AccountOutcome::WrongPassword,
        Ok(response) => {
            warn!(status = response.status, "account deletion rejected");
            AccountOutcome::DeleteFailed
        }
        Err(err) => {
            warn!(error = %err, "account deletion failed");
            AccountOutcome::DeleteFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AccountOutcome, DELETE_ACCOUNT_PATH, LOGOUT_PATH, delete_account, logout};
    use crate::app_lib::{
        AppError,
        api::{
            Method,
            testing::{FakeCsrf, ScriptedTransport, client},
        },
    };

    #[tokio::test]
    async fn logout_success_reloads_after_a_second() {
        let transport = ScriptedTransport::new().respond(200, "");
        let csrf = FakeCsrf::with_token("t");

        let outcome = logout(&client(&transport, &csrf)).await;

        assert_eq!(outcome, AccountOutcome::LoggedOut);
        assert_eq!(outcome.message(), "Log out successful");
        assert_eq!(outcome.reload_delay_ms(), Some(1_000));
        let sent = transport.sent();
        assert_eq!(sent[0].request.method, Method::Post);
        assert_eq!(sent[0].request.path, LOGOUT_PATH);
    }

    #[tokio::test]
    async fn logout_retries_after_csrf_refresh() {
        let transport = ScriptedTransport::new()
            .respond(403, r#"{"reason":"Invalid CSRF token"}"#)
            .respond(204, "");
        let csrf = FakeCsrf::with_token("old").then_refresh_to("new");

        let outcome = logout(&client(&transport, &csrf)).await;

        assert_eq!(outcome, AccountOutcome::LoggedOut);
        assert_eq!(transport.sent()[1].csrf_token.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn logout_network_failure_is_reported() {
        let transport =
            ScriptedTransport::new().fail(AppError::Network("offline".to_string()));
        let csrf = FakeCsrf::with_token("t");

        let outcome = logout(&client(&transport, &csrf)).await;

        assert_eq!(outcome, AccountOutcome::LogoutFailed);
        assert_eq!(outcome.message(), "Error logging out");
        assert!(outcome.closes_dialog());
        assert_eq!(outcome.reload_delay_ms(), None);
    }

    #[tokio::test]
    async fn empty_password_never_reaches_the_backend() {
        let transport = ScriptedTransport::new();
        let csrf = FakeCsrf::with_token("t");

        let outcome = delete_account(&client(&transport, &csrf), "").await;

        assert_eq!(outcome, AccountOutcome::PasswordRequired);
        assert!(!outcome.closes_dialog());
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn delete_sends_password_body() {
        let transport = ScriptedTransport::new().respond(200, "");
        let csrf = FakeCsrf::with_token("t");

        let outcome = delete_account(&client(&transport, &csrf), "s3cret").await;

        assert_eq!(outcome, AccountOutcome::Deleted);
        assert_eq!(outcome.reload_delay_ms(), Some(500));
        let sent = transport.sent();
        assert_eq!(sent[0].request.method, Method::Delete);
        assert_eq!(sent[0].request.path, DELETE_ACCOUNT_PATH);
        assert_eq!(sent[0].request.body.as_deref(), Some(r#"{"password":"s3cret"}"#));
    }

    #[tokio::test]
    async fn delete_maps_unauthorized_to_wrong_password() {
        let transport = ScriptedTransport::new().respond(401, r#"{"reason":"bad password"}"#);
        let csrf = FakeCsrf::with_token("t");

        let outcome = delete_account(&client(&transport, &csrf), "nope").await;

        assert_eq!(outcome, AccountOutcome::WrongPassword);
        assert_eq!(outcome.message(), "Password is incorrect");
        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn delete_other_statuses_are_generic_failures() {
        let transport = ScriptedTransport::new().respond(500, "");
        let csrf = FakeCsrf::with_token("t");

        let outcome = delete_account(&client(&transport, &csrf), "pw").await;

        assert_eq!(outcome, AccountOutcome::DeleteFailed);
        assert_eq!(outcome.message(), "Error deleting account");
    }
}
