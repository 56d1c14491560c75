//! # Transport
//!
//! The single seam between the client and the network. The `Client` only
//! ever talks JSON through a [`Transport`], so tests (and callers with
//! pooled or instrumented HTTP stacks) can swap the implementation.

use async_trait::async_trait;
use pakasir_core::{PakasirError, PakasirResult};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, error};

/// A single-shot JSON request to the gateway.
///
/// Implementations must serialize `body` as JSON with a JSON content type,
/// resolve with the parsed body on a 2xx status, and fail with
/// [`PakasirError::Http`] carrying the status, status text, method, URL,
/// and raw body text otherwise.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> PakasirResult<Value>;
}

/// Default transport backed by a shared `reqwest::Client`
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Wrap an existing `reqwest::Client` (custom pools, proxies, timeouts)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> PakasirResult<Value> {
        debug!(%method, url, "sending gateway request");

        let mut request = self
            .client
            .request(method.clone(), url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PakasirError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| PakasirError::Network(e.to_string()))?;

        if !status.is_success() {
            error!(status = status.as_u16(), url, body = %text, "gateway returned an error");
            return Err(PakasirError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
                method: method.to_string(),
                url: url.to_string(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| PakasirError::Serialization(e.to_string()))
    }
}
