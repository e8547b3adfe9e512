//! HTTP client for the Approvedeny API.
//!
//! [`Client`] wraps a `reqwest::Client` and exposes the three remote
//! operations: fetching a check request, creating one, and fetching its
//! response. All operations share one request pipeline: serialize the
//! payload, attach auth headers, send, then decode the body as either a
//! [`SuccessResponse`] or an [`ErrorResponse`] depending on the status.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::{CreateCheckRequestPayload, ErrorResponse, SuccessResponse};

/// Production API endpoint.
const DEFAULT_BASE_URL: &str = "https://api.approvedeny.com";

/// Fixed client identifier sent as the `User-Agent` header.
const DEFAULT_USER_AGENT: &str = concat!("approvedeny-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// Configuration for the Approvedeny client.
///
/// # Examples
///
/// ```
/// use approvedeny_sdk::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("test_api_key")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the Approvedeny API.
    pub base_url: String,
    /// API key used for bearer authentication. Must be non-empty.
    pub api_key: String,
    /// User agent string sent with every request.
    pub user_agent: String,
    /// Request timeout enforced by the underlying HTTP client.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with the given API key and defaults for
    /// everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the base URL. Intended for tests and self-hosted deployments.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the API key is empty.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::configuration("API key required"));
        }

        Ok(())
    }
}

// Security: don't expose the API key in debug output
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<REDACTED>")
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Client for the Approvedeny approval/denial decisioning API.
///
/// Holds fixed configuration and a reusable HTTP transport; no state is
/// shared between calls. The client is `Clone` and safe to use from
/// multiple tasks, with concurrency guarantees delegated to the underlying
/// `reqwest::Client`.
///
/// # Examples
///
/// ```no_run
/// use approvedeny_sdk::Client;
///
/// # async fn example() -> Result<(), approvedeny_sdk::Error> {
/// let client = Client::new("test_api_key")?;
///
/// let response = client.get_check_request("check_request_id").await?;
/// println!("status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    http_client: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Create a client with the default configuration and the given API key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the API key is empty or the
    /// HTTP transport cannot be created.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client with an explicit configuration.
    ///
    /// This is the seam for pointing the client at a non-production
    /// endpoint, e.g. a mock server in tests.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when validation fails or the HTTP
    /// transport cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                Error::configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the configured API key.
    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    /// Fetch a single check request by its ID.
    ///
    /// Issues `GET /v1/requests/{check_request_id}`. The ID is interpolated
    /// into the path verbatim; the caller supplies a path-safe identifier.
    ///
    /// # Errors
    ///
    /// Fails per the shared pipeline: [`Error::Transport`], [`Error::Io`],
    /// [`Error::Decoding`], or [`Error::Remote`] for non-200 responses.
    pub async fn get_check_request(&self, check_request_id: &str) -> Result<SuccessResponse> {
        let url = format!("{}/v1/requests/{}", self.config.base_url, check_request_id);

        self.request(Method::GET, &url, Option::<&()>::None).await
    }

    /// Create a new check request against a configured check.
    ///
    /// Issues `POST /v1/checks/{check_id}` with `payload` as the JSON body.
    ///
    /// # Errors
    ///
    /// Fails per the shared pipeline, plus [`Error::Encoding`] when the
    /// payload cannot be serialized.
    pub async fn create_check_request(
        &self,
        check_id: &str,
        payload: &CreateCheckRequestPayload,
    ) -> Result<SuccessResponse> {
        let url = format!("{}/v1/checks/{}", self.config.base_url, check_id);

        self.request(Method::POST, &url, Some(payload)).await
    }

    /// Fetch the approval/denial response for a check request.
    ///
    /// Issues `GET /v1/requests/{check_request_id}/response`.
    ///
    /// # Errors
    ///
    /// Fails per the shared pipeline: [`Error::Transport`], [`Error::Io`],
    /// [`Error::Decoding`], or [`Error::Remote`] for non-200 responses.
    pub async fn get_check_request_response(
        &self,
        check_request_id: &str,
    ) -> Result<SuccessResponse> {
        let url = format!(
            "{}/v1/requests/{}/response",
            self.config.base_url, check_request_id
        );

        self.request(Method::GET, &url, Option::<&()>::None).await
    }

    /// Shared request pipeline for all remote operations.
    ///
    /// Serializes the payload (empty body when `None`), attaches the auth
    /// and content headers, sends the request, reads the full body, then
    /// branches on the status: exactly 200 decodes a [`SuccessResponse`],
    /// anything else decodes an [`ErrorResponse`] and surfaces its message
    /// as [`Error::Remote`]. No retries.
    async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        payload: Option<&B>,
    ) -> Result<SuccessResponse> {
        let body = match payload {
            Some(payload) => serde_json::to_vec(payload).map_err(Error::Encoding)?,
            None => Vec::new(),
        };

        debug!(method = %method, url = %url, "Sending API request");

        let response = self
            .http_client
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(Error::Io)?;

        if status != StatusCode::OK {
            let error_response: ErrorResponse =
                serde_json::from_slice(&body).map_err(Error::Decoding)?;

            warn!(status = status.as_u16(), url = %url, "API request rejected");

            return Err(Error::Remote {
                message: error_response.message,
            });
        }

        serde_json::from_slice(&body).map_err(Error::Decoding)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
