//! HTTP gateway: the single chokepoint for every call to the REST API.
//!
//! Every request gets the base URL, JSON headers and the fixed timeout from
//! [`GatewayConfig`]. The bearer token is read from the injected
//! [`SessionStorage`] right before sending. A 401 on a protected endpoint
//! wipes the persisted session and sends the browser to the login page.
//! Every failure is normalized into one [`ApiError`].

pub mod error;
pub mod transport;

pub use error::{ApiError, ApiErrorKind, GENERIC_ERROR_MESSAGE};
pub use transport::{FetchTransport, HttpRequest, HttpResponse, HttpTransport, Method, TransportError};

use crate::shared::api_utils::GatewayConfig;
use crate::shared::navigation::{BrowserNavigator, Navigator, LOGIN_PATH};
use crate::system::auth::storage::{LocalSessionStorage, MemorySessionStorage, SessionStorage};
use contracts::shared::{ApiResponse, Pagination};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// A page of a list endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}

/// Payload extraction from the response envelope
pub trait EnvelopeExt<T> {
    /// `data` is required
    fn into_data(self) -> Result<T, ApiError>;
    /// Missing `data` means an empty payload
    fn into_data_or_default(self) -> T
    where
        T: Default;
}

impl<T> EnvelopeExt<T> for ApiResponse<T> {
    fn into_data(self) -> Result<T, ApiError> {
        self.data
            .ok_or_else(|| ApiError::api("Respons server tidak memuat data"))
    }

    fn into_data_or_default(self) -> T
    where
        T: Default,
    {
        self.data.unwrap_or_default()
    }
}

impl<T> From<ApiResponse<Vec<T>>> for Page<T> {
    fn from(response: ApiResponse<Vec<T>>) -> Self {
        Self {
            items: response.data.unwrap_or_default(),
            pagination: response.pagination,
        }
    }
}

#[derive(Clone)]
pub struct Gateway {
    config: GatewayConfig,
    transport: Arc<dyn HttpTransport>,
    session: Arc<dyn SessionStorage>,
    navigator: Arc<dyn Navigator>,
}

impl Gateway {
    pub fn new(
        config: GatewayConfig,
        transport: Arc<dyn HttpTransport>,
        session: Arc<dyn SessionStorage>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            config,
            transport,
            session,
            navigator,
        }
    }

    /// Production wiring: `fetch`, localStorage (memory when unavailable),
    /// `window.location` navigation
    pub fn browser(config: GatewayConfig) -> Self {
        let session: Arc<dyn SessionStorage> = if LocalSessionStorage::is_available() {
            Arc::new(LocalSessionStorage)
        } else {
            log::warn!("localStorage unavailable, session will not survive reload");
            Arc::new(MemorySessionStorage::default())
        };
        Self::new(
            config,
            Arc::new(FetchTransport),
            session,
            Arc::new(BrowserNavigator),
        )
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Persisted auth slice shared with the auth store
    pub fn session(&self) -> &Arc<dyn SessionStorage> {
        &self.session
    }

    pub fn request(&self, method: Method, path: impl Into<String>) -> ApiCall<'_> {
        ApiCall {
            gateway: self,
            method,
            path: path.into(),
            query: None,
            body: None,
            encode_error: None,
            public: false,
        }
    }

    pub fn get(&self, path: impl Into<String>) -> ApiCall<'_> {
        self.request(Method::Get, path)
    }

    pub fn post(&self, path: impl Into<String>) -> ApiCall<'_> {
        self.request(Method::Post, path)
    }

    pub fn put(&self, path: impl Into<String>) -> ApiCall<'_> {
        self.request(Method::Put, path)
    }

    pub fn delete(&self, path: impl Into<String>) -> ApiCall<'_> {
        self.request(Method::Delete, path)
    }

    fn force_logout(&self) {
        log::warn!("Session rejected by server (401), redirecting to {}", LOGIN_PATH);
        self.session.clear();
        self.navigator.redirect(LOGIN_PATH);
    }
}

/// One outbound call being assembled
pub struct ApiCall<'a> {
    gateway: &'a Gateway,
    method: Method,
    path: String,
    query: Option<String>,
    body: Option<String>,
    encode_error: Option<String>,
    public: bool,
}

impl ApiCall<'_> {
    /// Query string from a filter struct; `None` fields are left out
    pub fn query<Q: Serialize>(mut self, query: &Q) -> Self {
        match serde_qs::to_string(query) {
            Ok(q) if !q.is_empty() => self.query = Some(q),
            Ok(_) => {}
            Err(e) => self.encode_error = Some(e.to_string()),
        }
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Self {
        match serde_json::to_string(body) {
            Ok(b) => self.body = Some(b),
            Err(e) => self.encode_error = Some(e.to_string()),
        }
        self
    }

    /// Login and password-recovery endpoints: no bearer, and a 401 is an
    /// ordinary failure rather than a session loss
    pub fn public(mut self) -> Self {
        self.public = true;
        self
    }

    pub async fn send<T: DeserializeOwned>(self) -> Result<ApiResponse<T>, ApiError> {
        if let Some(err) = self.encode_error {
            return Err(ApiError::api(err));
        }
        let gateway = self.gateway;

        let mut url = gateway.config.url(&self.path);
        if let Some(query) = &self.query {
            url.push('?');
            url.push_str(query);
        }

        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        if !self.public {
            if let Some(token) = gateway.session.token() {
                headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
            }
        }

        let request = HttpRequest {
            method: self.method,
            url,
            headers,
            body: self.body,
            timeout: gateway.config.timeout,
        };
        log::debug!("{} {}", request.method.as_str(), request.url);

        let response = gateway.transport.send(request).await.map_err(|e| {
            log::warn!("{} {} failed: {}", self.method.as_str(), self.path, e);
            ApiError::from_transport(&e)
        })?;

        if response.status == 401 && !self.public {
            gateway.force_logout();
            return Err(ApiError::from_status(response.status, &response.body));
        }
        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }

        let envelope: ApiResponse<T> = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::api(format!("Respons server tidak valid: {}", e)))?;
        if !envelope.success {
            return Err(ApiError::api(envelope.message));
        }
        Ok(envelope)
    }
}
