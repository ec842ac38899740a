use super::transport::TransportError;
use contracts::shared::ErrorBody;

/// Localized fallback when neither the server nor the transport gave a reason
pub const GENERIC_ERROR_MESSAGE: &str = "Terjadi kesalahan";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Network unreachable, timeout, aborted request
    Network,
    /// 401 from the server
    Auth,
    /// Any other failure status, `success: false`, or an unreadable body
    Api,
}

/// The one error shape every gateway call resolves to
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        Self { kind, message }
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Api, message)
    }

    pub fn is_auth(&self) -> bool {
        self.kind == ApiErrorKind::Auth
    }

    pub fn from_transport(err: &TransportError) -> Self {
        Self::new(ApiErrorKind::Network, err.to_string())
    }

    /// Normalize a non-2xx response: body `message` first, then the status
    /// line, never the raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind = if status == 401 {
            ApiErrorKind::Auth
        } else {
            ApiErrorKind::Api
        };
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status code {}", status));
        Self::new(kind, message)
    }
}
