//! Request model and CSRF-aware execution for the Social Scribe JSON API.
//!
//! Every authenticated backend route checks the `X-Csrf-Token` header against
//! the token issued by the session check and answers `403` on mismatch. The
//! token can rotate while a view is open, so [`ApiClient::execute`] refreshes
//! it once on `403` and retries the request exactly once. The transport is a
//! trait so the orchestration runs the same way in the browser and in tests.

use super::errors::AppError;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, warn};

/// Header carrying the anti-forgery token on every authenticated call.
pub const CSRF_HEADER: &str = "X-Csrf-Token";
/// Status the backend answers with when the CSRF token is missing or stale.
pub const CSRF_REJECTED_STATUS: u16 = 403;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// A single backend call. Requests always include cookies; the body, when
/// present, is already encoded JSON.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attaches a JSON body.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, AppError> {
        let payload = serde_json::to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        self.body = Some(payload);
        Ok(self)
    }
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        serde_json::from_str(&self.body)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    }

    /// Human readable error from a JSON error body. The backend uses either
    /// `message` or `reason`; non-JSON bodies yield `None`.
    pub fn error_message(&self) -> Option<String> {
        let value: Value = serde_json::from_str(&self.body).ok()?;
        ["message", "reason"].iter().find_map(|key| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(|text| text.chars().take(MAX_ERROR_CHARS).collect())
        })
    }

    /// Converts a non-2xx response into an `AppError::Http`, keeping the
    /// server message when there is one.
    pub fn into_error(self, fallback: &str) -> AppError {
        let message = self
            .error_message()
            .unwrap_or_else(|| sanitize_body(&self.body, fallback));
        AppError::Http {
            status: self.status,
            message,
        }
    }
}

/// Sends requests to the backend.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(
        &self,
        request: &ApiRequest,
        csrf_token: Option<&str>,
    ) -> Result<ApiResponse, AppError>;
}

/// Supplies the CSRF token and knows how to obtain a fresh one.
#[allow(async_fn_in_trait)]
pub trait CsrfSource {
    fn current(&self) -> Option<String>;

    /// Re-runs the session check and returns the newly issued token.
    async fn refresh(&self) -> Result<Option<String>, AppError>;
}

/// Executes API requests with the CSRF header and the one-shot refresh policy.
#[derive(Clone)]
pub struct ApiClient<T, C> {
    transport: T,
    csrf: C,
}

impl<T: Transport, C: CsrfSource> ApiClient<T, C> {
    pub fn new(transport: T, csrf: C) -> Self {
        Self { transport, csrf }
    }

    /// Sends the request; on `403` refreshes the CSRF token once and resends.
    /// The second response is returned whatever its status.
    pub async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, AppError> {
        let token = self.csrf.current();
        let response = self.transport.send(request, token.as_deref()).await?;
        if response.status != CSRF_REJECTED_STATUS {
            return Ok(response);
        }

        debug!(path = %request.path, "csrf token rejected, refreshing once");
        let token = match self.csrf.refresh().await {
            Ok(token) => token,
            Err(err) => {
                warn!(path = %request.path, error = %err, "csrf refresh failed");
                self.csrf.current()
            }
        };

        self.transport.send(request, token.as_deref()).await
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
pub fn sanitize_body(body: &str, fallback: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted transport and CSRF source used by feature tests.

    use super::{ApiClient, ApiRequest, ApiResponse, CsrfSource, Transport};
    use crate::app_lib::AppError;
    use std::{
        cell::{Cell, RefCell},
        collections::VecDeque,
        rc::Rc,
    };

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct SentRequest {
        pub request: ApiRequest,
        pub csrf_token: Option<String>,
    }

    /// Replays queued responses in order and records what was sent.
    #[derive(Clone, Default)]
    pub struct ScriptedTransport {
        responses: Rc<RefCell<VecDeque<Result<ApiResponse, AppError>>>>,
        sent: Rc<RefCell<Vec<SentRequest>>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, status: u16, body: &str) -> Self {
            self.responses
                .borrow_mut()
                .push_back(Ok(ApiResponse::new(status, body)));
            self
        }

        pub fn fail(self, err: AppError) -> Self {
            self.responses.borrow_mut().push_back(Err(err));
            self
        }

        pub fn sent(&self) -> Vec<SentRequest> {
            self.sent.borrow().clone()
        }
    }

    impl Transport for ScriptedTransport {
        async fn send(
            &self,
            request: &ApiRequest,
            csrf_token: Option<&str>,
        ) -> Result<ApiResponse, AppError> {
            self.sent.borrow_mut().push(SentRequest {
                request: request.clone(),
                csrf_token: csrf_token.map(str::to_string),
            });
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(AppError::Network("no scripted response".to_string())))
        }
    }

    /// Hands out a fixed sequence of refreshed tokens.
    #[derive(Clone, Default)]
    pub struct FakeCsrf {
        current: Rc<RefCell<Option<String>>>,
        next: Rc<RefCell<VecDeque<Result<Option<String>, AppError>>>>,
        refreshes: Rc<Cell<usize>>,
    }

    impl FakeCsrf {
        pub fn with_token(token: &str) -> Self {
            let csrf = Self::default();
            *csrf.current.borrow_mut() = Some(token.to_string());
            csrf
        }

        pub fn then_refresh_to(self, token: &str) -> Self {
            self.next
                .borrow_mut()
                .push_back(Ok(Some(token.to_string())));
            self
        }

        pub fn then_refresh_fails(self) -> Self {
            self.next
                .borrow_mut()
                .push_back(Err(AppError::Network("session check failed".to_string())));
            self
        }

        pub fn refreshes(&self) -> usize {
            self.refreshes.get()
        }
    }

    impl CsrfSource for FakeCsrf {
        fn current(&self) -> Option<String> {
            self.current.borrow().clone()
        }

        async fn refresh(&self) -> Result<Option<String>, AppError> {
            self.refreshes.set(self.refreshes.get() + 1);
            let next = self
                .next
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(self.current()));
            if let Ok(token) = &next {
                self.current.borrow_mut().clone_from(token);
            }
            next
        }
    }

    pub fn client(
        transport: &ScriptedTransport,
        csrf: &FakeCsrf,
    ) -> ApiClient<ScriptedTransport, FakeCsrf> {
        ApiClient::new(transport.clone(), csrf.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{FakeCsrf, ScriptedTransport, client};
    use super::{ApiRequest, ApiResponse, Method, sanitize_body};
    use crate::app_lib::AppError;
    use serde_json::json;

    #[tokio::test]
    async fn non_forbidden_response_is_not_retried() {
        let transport = ScriptedTransport::new().respond(401, r#"{"reason":"nope"}"#);
        let csrf = FakeCsrf::with_token("t1").then_refresh_to("t2");

        let response = client(&transport, &csrf)
            .execute(&ApiRequest::post("/api/v1/user/logout"))
            .await
            .expect("response");

        assert_eq!(response.status, 401);
        assert_eq!(csrf.refreshes(), 0);
        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].csrf_token.as_deref(), Some("t1"));
    }

    #[tokio::test]
    async fn forbidden_refreshes_once_and_retries_with_new_token() {
        let transport = ScriptedTransport::new()
            .respond(403, r#"{"success":false,"reason":"Invalid CSRF token"}"#)
            .respond(200, "{}");
        let csrf = FakeCsrf::with_token("stale").then_refresh_to("fresh");

        let response = client(&transport, &csrf)
            .execute(&ApiRequest::post("/api/v1/user/logout"))
            .await
            .expect("response");

        assert!(response.ok());
        assert_eq!(csrf.refreshes(), 1);
        let sent = transport.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].csrf_token.as_deref(), Some("stale"));
        assert_eq!(sent[1].csrf_token.as_deref(), Some("fresh"));
        assert_eq!(sent[0].request, sent[1].request);
    }

    #[tokio::test]
    async fn second_forbidden_is_returned_without_another_retry() {
        let transport = ScriptedTransport::new()
            .respond(403, r#"{"reason":"CSRF token missing"}"#)
            .respond(403, r#"{"reason":"CSRF token missing"}"#)
            .respond(200, "{}");
        let csrf = FakeCsrf::with_token("a").then_refresh_to("b");

        let response = client(&transport, &csrf)
            .execute(&ApiRequest::get("/api/v1/user/blogs?category=all"))
            .await
            .expect("response");

        assert_eq!(response.status, 403);
        assert_eq!(csrf.refreshes(), 1);
        assert_eq!(transport.sent().len(), 2);
    }

    #[tokio::test]
    async fn failed_refresh_still_retries_with_current_token() {
        let transport = ScriptedTransport::new()
            .respond(403, "")
            .respond(403, "");
        let csrf = FakeCsrf::with_token("only").then_refresh_fails();

        let response = client(&transport, &csrf)
            .execute(&ApiRequest::get("/api/v1/user/resend-otp"))
            .await
            .expect("response");

        assert_eq!(response.status, 403);
        let sent = transport.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].csrf_token.as_deref(), Some("only"));
    }

    #[tokio::test]
    async fn transport_error_short_circuits() {
        let transport =
            ScriptedTransport::new().fail(AppError::Timeout("Request timed out.".to_string()));
        let csrf = FakeCsrf::with_token("t");

        let err = client(&transport, &csrf)
            .execute(&ApiRequest::get("/api/v1/user/blogs?category=all"))
            .await
            .expect_err("timeout");

        assert_eq!(err, AppError::Timeout("Request timed out.".to_string()));
        assert_eq!(csrf.refreshes(), 0);
    }

    #[test]
    fn json_body_is_encoded() {
        let request = ApiRequest::delete("/api/v1/user/delete-account")
            .json(&json!({ "password": "hunter2" }))
            .expect("encode");
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.body.as_deref(), Some(r#"{"password":"hunter2"}"#));
    }

    #[test]
    fn error_message_prefers_message_then_reason() {
        let both = ApiResponse::new(400, r#"{"message":"bad key","reason":"other"}"#);
        assert_eq!(both.error_message().as_deref(), Some("bad key"));

        let reason = ApiResponse::new(429, r#"{"success":false,"reason":"Too Many Requests"}"#);
        assert_eq!(reason.error_message().as_deref(), Some("Too Many Requests"));

        let blank = ApiResponse::new(500, r#"{"message":"  "}"#);
        assert_eq!(blank.error_message(), None);

        let html = ApiResponse::new(502, "<html>Bad Gateway</html>");
        assert_eq!(html.error_message(), None);
    }

    #[test]
    fn into_error_falls_back_to_sanitized_body() {
        let err = ApiResponse::new(502, "  upstream down \n").into_error("Request failed.");
        assert_eq!(
            err,
            AppError::Http {
                status: 502,
                message: "upstream down".to_string(),
            }
        );

        let empty = ApiResponse::new(500, "").into_error("Unknown error");
        assert_eq!(
            empty,
            AppError::Http {
                status: 500,
                message: "Unknown error".to_string(),
            }
        );
    }

    #[test]
    fn sanitize_body_truncates_long_bodies() {
        let long = "x".repeat(500);
        assert_eq!(sanitize_body(&long, "fallback").chars().count(), 200);
    }
}
