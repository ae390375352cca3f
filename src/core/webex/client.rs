//! Authenticated Webex REST API client.

use reqwest::{Url, header};
use serde_json::{Map, Value};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error};

use super::error::{ApiError, ApiResult};
use super::request::{ApiRequest, FieldSet, HttpMethod, build_url, split_endpoint};
use crate::core::config::WebexConfig;
use crate::core::error::{Error, Result};

/// Default Webex REST API base URL.
pub const DEFAULT_BASE_URL: &str = "https://webexapis.com/v1";

/// Per-call timeout applied to every outgoing request.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client handle shared by every tool invocation.
///
/// Built once at startup and never mutated afterwards. The inner
/// `reqwest::Client` owns a connection pool: each call checks a connection
/// out for the duration of the request and hands it back when the response
/// has been read or the call has failed.
#[derive(Clone)]
pub struct WebexClient {
    http: reqwest::Client,
    base_url: Url,
}

impl fmt::Debug for WebexClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebexClient")
            .field("base_url", &self.base_url)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl WebexClient {
    /// Create a client with the given credential, base URL and timeout.
    pub fn new(access_token: &str, base_url: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| Error::config(format!("Invalid Webex API base URL: {}", base_url.as_ref())))?;

        let mut headers = header::HeaderMap::new();

        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", access_token))
            .map_err(|_| Error::config("Invalid Webex access token format"))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    /// Create a client from configuration.
    ///
    /// Fails with [`Error::Unconfigured`] when no access token is set.
    pub fn from_config(config: &WebexConfig) -> Result<Self> {
        let token = config
            .access_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(Error::Unconfigured)?;

        Self::new(
            token,
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// The base URL every endpoint is resolved against.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Perform one authenticated call, naming the method as a string.
    ///
    /// Unknown methods fail before anything is sent. `endpoint` is split on
    /// `/` into fixed segments. Query parameters are only attached for
    /// GET/DELETE and the body only for POST/PUT.
    pub async fn request(
        &self,
        method: &str,
        endpoint: &str,
        query: Option<&FieldSet>,
        body: Option<&Value>,
    ) -> ApiResult<Value> {
        let method: HttpMethod = method.parse()?;
        self.send(method, &split_endpoint(endpoint), query, body).await
    }

    /// Perform the call described by `request`.
    pub async fn execute(&self, request: ApiRequest) -> ApiResult<Value> {
        self.send(
            request.method,
            &request.path,
            request.query.as_ref(),
            request.body.as_ref(),
        )
        .await
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &[String],
        query: Option<&FieldSet>,
        body: Option<&Value>,
    ) -> ApiResult<Value> {
        let url = build_url(&self.base_url, path).inspect_err(|e| {
            error!(method = %method, "Webex API request refused: {}", e);
        })?;
        debug!(method = %method, url = %url, "Webex API request");

        let mut builder = self.http.request(method.to_reqwest(), url);
        if method.uses_query() {
            if let Some(query) = query.filter(|q| !q.is_empty()) {
                builder = builder.query(query);
            }
        } else if let Some(body) = body {
            builder = builder.json(body);
        }

        let result: ApiResult<Value> = async {
            let response = builder.send().await?.error_for_status()?;
            let bytes = response.bytes().await?;
            if bytes.is_empty() {
                return Ok(Value::Object(Map::new()));
            }
            serde_json::from_slice(&bytes).map_err(|e| ApiError::InvalidResponse(e.to_string()))
        }
        .await;

        if let Err(e) = &result {
            error!(
                method = %method,
                path = %path.join("/"),
                status = ?e.status(),
                network = e.is_network(),
                "Webex API request failed: {}",
                e
            );
        }
        result
    }
}
