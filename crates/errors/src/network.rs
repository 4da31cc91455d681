//! Network-related error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

/// Low-level transport failures raised by the HTTP client
#[derive(Debug, Clone, Error)]
pub enum NetworkError {
    #[error("connection timeout to {url}")]
    Timeout { url: String },

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("connection refused: {0}")]
    ConnectionRefused(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("SSL/TLS error: {0}")]
    TlsError(String),

    #[error("failed to read response body: {0}")]
    BodyRead(String),

    #[error("client setup failed: {0}")]
    ClientSetup(String),
}

impl UserFacingError for NetworkError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::Timeout { .. } | Self::ConnectionRefused(_) => {
                Some("Check network connectivity to the build endpoint.")
            }
            Self::InvalidUrl(_) => Some("Fix the configured endpoint URL."),
            _ => None,
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::ConnectionRefused(_) | Self::RequestFailed(_)
        )
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::Timeout { .. } => "network.timeout",
            Self::RequestFailed(_) => "network.request_failed",
            Self::ConnectionRefused(_) => "network.connection_refused",
            Self::InvalidUrl(_) => "network.invalid_url",
            Self::TlsError(_) => "network.tls",
            Self::BodyRead(_) => "network.body_read",
            Self::ClientSetup(_) => "network.client_setup",
        };
        Some(code)
    }
}

/// The build API could not be called successfully.
///
/// Displays the same fixed message whatever went wrong; the status and
/// transport detail are kept for logs only.
#[derive(Debug, Clone, Error)]
#[error("{}", ApiCallError::MESSAGE)]
pub struct ApiCallError {
    /// HTTP status when the server answered at all
    pub status: Option<u16>,
    /// Transport failure or status line, for diagnostics
    pub detail: String,
}

impl ApiCallError {
    pub const MESSAGE: &'static str = "unable to call API";

    #[must_use]
    pub fn status(status: u16, detail: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            detail: detail.into(),
        }
    }

    #[must_use]
    pub fn transport(err: &impl std::fmt::Display) -> Self {
        Self {
            status: None,
            detail: err.to_string(),
        }
    }
}

impl UserFacingError for ApiCallError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Borrowed(Self::MESSAGE)
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self.status {
            Some(401 | 403) => Some("Check that the API key belongs to the Bugsnag project."),
            Some(_) => None,
            None => Some("Check network connectivity to the build endpoint."),
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        Some(if self.status.is_some() {
            "api.bad_status"
        } else {
            "api.transport"
        })
    }
}
