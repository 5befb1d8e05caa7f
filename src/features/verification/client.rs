//! Verification calls: Hashnode API key, email OTP and OTP resend. Each call
//! returns an outcome that carries the exact toast text, so views only render.

use crate::{
    app_lib::{ApiClient, ApiRequest, CsrfSource, Transport, config::build_url_with_base},
    features::verification::types::{
        HashnodeVerifyRequest, OtpStatus, OtpVerifyRequest, Provider,
    },
};
use tracing::{info, warn};

pub const VERIFY_HASHNODE_PATH: &str = "/api/v1/user/verify-hashnode";
pub const VERIFY_EMAIL_PATH: &str = "/api/v1/user/verify-email";
pub const RESEND_OTP_PATH: &str = "/api/v1/user/resend-otp";

/// Full-page navigation target that starts the provider's OAuth flow.
pub fn connect_url(api_base_url: &str, provider: Provider) -> String {
    build_url_with_base(api_base_url, provider.connect_path())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HashnodeOutcome {
    /// No key entered; nothing was sent.
    Skipped,
    Verified,
    Rejected(String),
    Failed,
}

impl HashnodeOutcome {
    pub fn toast(&self) -> Option<String> {
        match self {
            HashnodeOutcome::Skipped | HashnodeOutcome::Verified => None,
            HashnodeOutcome::Rejected(message) => Some(message.clone()),
            HashnodeOutcome::Failed => Some("Error verifying Hashnode".to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OtpOutcome {
    Missing,
    Verified,
    Invalid,
    Expired,
    Rejected,
    Failed,
}

impl OtpOutcome {
    pub fn toast(self) -> Option<&'static str> {
        match self {
            OtpOutcome::Missing => Some("Please enter OTP"),
            OtpOutcome::Verified => None,
            OtpOutcome::Invalid => Some("Invalid OTP, Please try again."),
            OtpOutcome::Expired => Some("OTP Expired, Please request a new OTP."),
            OtpOutcome::Rejected => Some("Something went wrong. Please try again later."),
            OtpOutcome::Failed => Some("Error verifying OTP"),
        }
    }

    /// New inline status, or `None` to keep the current one.
    pub fn status(self) -> Option<OtpStatus> {
        match self {
            OtpOutcome::Verified => Some(OtpStatus::Success),
            OtpOutcome::Invalid | OtpOutcome::Expired | OtpOutcome::Rejected => {
                Some(OtpStatus::Failed)
            }
            OtpOutcome::Missing | OtpOutcome::Failed => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResendOutcome {
    MissingEmail,
    Sent,
    RateLimited { reason: String },
    Rejected(String),
    Failed,
}

impl ResendOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ResendOutcome::Sent)
    }

    pub fn toast(&self) -> String {
        match self {
            ResendOutcome::MissingEmail => "Email is required to resend OTP".to_string(),
            ResendOutcome::Sent => "OTP sent successfully".to_string(),
            ResendOutcome::RateLimited { .. } => {
                "Too many requests. Wait for 1 minute before trying again".to_string()
            }
            ResendOutcome::Rejected(message) => message.clone(),
            ResendOutcome::Failed => "Failed to send OTP".to_string(),
        }
    }

    /// Backend reason kept next to the resend button while rate limited.
    pub fn inline_error(&self) -> Option<&str> {
        match self {
            ResendOutcome::RateLimited { reason } => Some(reason),
            _ => None,
        }
    }
}

/// Submits a Hashnode personal access key. An empty key sends nothing.
pub async fn verify_hashnode<T: Transport, C: CsrfSource>(
    api: &ApiClient<T, C>,
    key: &str,
) -> HashnodeOutcome {
    if key.is_empty() {
        return HashnodeOutcome::Skipped;
    }

    let request = match ApiRequest::post(VERIFY_HASHNODE_PATH).json(&HashnodeVerifyRequest { key })
    {
        Ok(request) => request,
        Err(_) => return HashnodeOutcome::Failed,
    };

    match api.execute(&request).await {
        Ok(response) if response.ok() => {
            info!("hashnode verified");
            HashnodeOutcome::Verified
        }
        Ok(response) => {
            warn!(status = response.status, "hashnode verification rejected");
            HashnodeOutcome::Rejected(
                response
                    .error_message()
                    .unwrap_or_else(|| "Failed to verify Hashnode".to_string()),
            )
        }
        Err(err) => {
            warn!(error = %err, "hashnode verification failed");
            HashnodeOutcome::Failed
        }
    }
}

/// Submits the emailed one-time code.
pub async fn verify_otp<T: Transport, C: CsrfSource>(
    api: &ApiClient<T, C>,
    otp: &str,
) -> OtpOutcome {
    if otp.is_empty() {
        return OtpOutcome::Missing;
    }

    let request = match ApiRequest::post(VERIFY_EMAIL_PATH).json(&OtpVerifyRequest { otp }) {
        Ok(request) => request,
        Err(_) => return OtpOutcome::Failed,
    };

    match api.execute(&request).await {
        Ok(response) if response.ok() => {
            info!("email verified");
            OtpOutcome::Verified
        }
        Ok(response) => match response.status {
            400 => OtpOutcome::Invalid,
            410 => OtpOutcome::Expired,
            status => {
                warn!(status, "otp verification rejected");
                OtpOutcome::Rejected
            }
        },
        Err(err) => {
            warn!(error = %err, "otp verification failed");
            OtpOutcome::Failed
        }
    }
}

/// Asks the backend to mail a new code to the account email.
pub async fn resend_otp<T: Transport, C: CsrfSource>(
    api: &ApiClient<T, C>,
    email: &str,
) -> ResendOutcome {
    if email.is_empty() {
        return ResendOutcome::MissingEmail;
    }

    match api.execute(&ApiRequest::get(RESEND_OTP_PATH)).await {
        Ok(response) if response.ok() => ResendOutcome::Sent,
        Ok(response) if response.status == 429 => ResendOutcome::RateLimited {
            reason: response
                .error_message()
                .unwrap_or_else(|| "Too Many Requests".to_string()),
        },
        Ok(response) => ResendOutcome::Rejected(
            response
                .error_message()
                .unwrap_or_else(|| "Failed to resend OTP".to_string()),
        ),
        Err(err) => {
            warn!(error = %err, "otp resend failed");
            ResendOutcome::Failed
        }
    }
}
