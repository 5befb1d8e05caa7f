use thiserror::Error;

/// Errors surfaced to views. Messages are rendered in toasts, so they must
/// never carry passwords, OTPs, API keys or CSRF tokens.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl AppError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn status_only_for_http_errors() {
        let http = AppError::Http {
            status: 410,
            message: "expired".to_string(),
        };
        assert_eq!(http.status(), Some(410));
        assert_eq!(AppError::Network("down".to_string()).status(), None);
    }

    #[test]
    fn display_includes_status_and_message() {
        let err = AppError::Http {
            status: 401,
            message: "Unauthorized: Session expired".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Request failed (401): Unauthorized: Session expired"
        );
    }
}
