//! Gateway configuration
//!
//! The API base URL is taken from the `API_URL` environment variable at
//! build time (`API_URL=https://inventaris.example/api trunk build`) and
//! falls back to the local development server.

use std::time::Duration;

/// Development server used when `API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Fixed request timeout applied to every outbound call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Get the base URL for API requests, without a trailing slash
///
/// # Example
/// ```rust
/// use inventory_frontend::shared::api_utils::api_base;
///
/// let id = 7;
/// let url = format!("{}/barang/{}", api_base(), id);
/// assert!(url.ends_with("/barang/7"));
/// ```
pub fn api_base() -> String {
    option_env!("API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a full API URL from a path starting with "/"
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(api_base())
    }
}
