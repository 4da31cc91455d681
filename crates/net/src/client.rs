//! HTTP client for the build API

use buildsnag_config::NetworkConfig;
use buildsnag_errors::{Error, NetworkError};
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Network client configuration
#[derive(Debug, Clone)]
pub struct NetConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("buildsnag/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl From<&NetworkConfig> for NetConfig {
    fn from(config: &NetworkConfig) -> Self {
        Self {
            timeout: config.timeout(),
            connect_timeout: config.connect_timeout(),
            ..Self::default()
        }
    }
}

/// Status, headers and body of a completed request
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// HTTP client wrapper. Sends each request once.
#[derive(Clone)]
pub struct NetClient {
    client: Client,
    config: NetConfig,
}

impl NetClient {
    /// Create a new network client
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reqwest client fails to initialize.
    pub fn new(config: NetConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| NetworkError::ClientSetup(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created with default settings.
    pub fn with_defaults() -> Result<Self, Error> {
        Self::new(NetConfig::default())
    }

    /// POST `payload` as a JSON body
    ///
    /// Any HTTP status counts as a completed request; only transport
    /// failures are errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized, the URL is
    /// invalid, or the request fails at the transport level.
    pub async fn post_json<T>(&self, url: &str, payload: &T) -> Result<ApiResponse, Error>
    where
        T: Serialize + ?Sized,
    {
        let url = crate::parse_url(url)?;
        let body = serde_json::to_vec(payload)?;

        debug!(url = %url, bytes = body.len(), "POST");
        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| classify(&e, url.as_str()))?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|e| NetworkError::BodyRead(e.to_string()))?;
        debug!(status, "Response received");

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }

    /// Configuration this client was built with
    #[must_use]
    pub fn config(&self) -> &NetConfig {
        &self.config
    }
}

fn classify(e: &reqwest::Error, url: &str) -> Error {
    if e.is_timeout() {
        NetworkError::Timeout {
            url: url.to_string(),
        }
        .into()
    } else if e.is_connect() {
        NetworkError::ConnectionRefused(e.to_string()).into()
    } else if e.is_builder() {
        NetworkError::InvalidUrl(e.to_string()).into()
    } else {
        NetworkError::RequestFailed(e.to_string()).into()
    }
}
