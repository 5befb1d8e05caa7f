//! Verification payloads and local progress. The Hashnode key and the OTP are
//! secrets; keep them out of logs.

use crate::features::session::types::SessionUser;
use serde::Serialize;

#[derive(Clone, Serialize)]
pub struct HashnodeVerifyRequest<'a> {
    pub key: &'a str,
}

#[derive(Clone, Serialize)]
pub struct OtpVerifyRequest<'a> {
    pub otp: &'a str,
}

/// Social providers linked through a backend OAuth redirect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    X,
    LinkedIn,
}

impl Provider {
    pub fn connect_path(self) -> &'static str {
        match self {
            Provider::X => "/api/v1/user/connect-twitter",
            Provider::LinkedIn => "/api/v1/user/connect-linkedin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Provider::X => "Connect X (Twitter)",
            Provider::LinkedIn => "Connect LinkedIn",
        }
    }
}

/// Inline result line under the OTP input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OtpStatus {
    #[default]
    Idle,
    Success,
    Failed,
}

impl OtpStatus {
    pub fn message(self) -> Option<&'static str> {
        match self {
            OtpStatus::Idle => None,
            OtpStatus::Success => Some("OTP Verified Successfully"),
            OtpStatus::Failed => Some("OTP Verification Failed"),
        }
    }
}

/// Which verification steps the account has completed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VerificationProgress {
    pub x: bool,
    pub linkedin: bool,
    pub hashnode: bool,
    pub email: bool,
}

impl VerificationProgress {
    pub fn from_user(user: &SessionUser) -> Self {
        Self {
            x: user.x_verified,
            linkedin: user.linkedin_verified,
            hashnode: user.hashnode_verified,
            email: user.email_verified,
        }
    }

    /// Hashnode and email are mandatory; one social account is enough.
    pub fn can_continue(self) -> bool {
        self.hashnode && self.email && (self.linkedin || self.x)
    }

    /// Writes the flags back into the session user, marking it verified once
    /// every required step is done.
    pub fn apply_to(self, user: &mut SessionUser) {
        user.x_verified = self.x;
        user.linkedin_verified = self.linkedin;
        user.hashnode_verified = self.hashnode;
        user.email_verified = self.email;
        if self.can_continue() {
            user.verified = true;
        }
    }
}
