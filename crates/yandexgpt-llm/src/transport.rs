// Blocking JSON transport seam (HTTP direct, no SDK)

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::error::Result;

/// Production endpoint of the foundation-model API.
pub const DEFAULT_BASE_URL: &str = "https://llm.api.cloud.yandex.net";

/// Blocking JSON transport between the client and the wire.
///
/// The client hands over paths relative to the API base; implementations
/// own base-url joining. Body status is not interpreted here: the client
/// decides what a well-formed response looks like.
pub trait Transport {
    fn post_json(&self, path: &str, headers: &HeaderMap, body: &Value) -> Result<Value>;

    fn get_json(&self, path: &str, headers: &HeaderMap) -> Result<Value>;
}

/// reqwest-backed transport with a configurable per-request timeout.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create transport against the production endpoint with no timeout.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::default()
    }
}

/// Builder for [`HttpTransport`].
#[derive(Debug, Default)]
pub struct HttpTransportBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl HttpTransportBuilder {
    /// Override the API base URL, e.g. to point at a gateway.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Per-request timeout. A timed-out request surfaces as a transport
    /// error and counts as an attempt failure in the retry loop.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<HttpTransport> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(HttpTransport {
            client: builder.build()?,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, path: &str, headers: &HeaderMap, body: &Value) -> Result<Value> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .headers(headers.clone())
            .json(body)
            .send()?;
        Ok(response.json()?)
    }

    fn get_json(&self, path: &str, headers: &HeaderMap) -> Result<Value> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .headers(headers.clone())
            .send()?;
        Ok(response.json()?)
    }
}
