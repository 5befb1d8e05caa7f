//! Browser transport built on `gloo-net`. Every request includes cookies so the
//! backend can read the session, and is aborted after a fixed timeout so a
//! stalled backend never leaves a view spinning.

use super::{
    api::{ApiRequest, ApiResponse, CSRF_HEADER, Method, Transport},
    config::AppConfig,
    errors::AppError,
};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use tracing::debug;
use web_sys::{AbortController, RequestCredentials};

/// Default request timeout (milliseconds) applied to every call.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

#[derive(Clone, Debug)]
pub struct BrowserTransport {
    config: AppConfig,
}

impl BrowserTransport {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

impl Default for BrowserTransport {
    fn default() -> Self {
        Self::new(AppConfig::load())
    }
}

impl Transport for BrowserTransport {
    async fn send(
        &self,
        request: &ApiRequest,
        csrf_token: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        let url = self.config.url(&request.path);
        let controller = AbortController::new()
            .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        }
        .credentials(RequestCredentials::Include)
        .abort_signal(Some(&signal));

        if let Some(token) = csrf_token {
            builder = builder.header(CSRF_HEADER, token);
        }

        let response = build(builder, request.body.as_deref())?
            .send()
            .await
            .map_err(map_request_error)?;
        let status = response.status();
        debug!(method = request.method.as_str(), path = %request.path, status, "api call");

        let body = response.text().await.unwrap_or_default();
        Ok(ApiResponse::new(status, body))
    }
}

fn build(builder: RequestBuilder, body: Option<&str>) -> Result<Request, AppError> {
    let request = match body {
        Some(payload) => builder
            .header("Content-Type", "application/json")
            .body(payload.to_string()),
        None => builder.build(),
    };
    request.map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}
