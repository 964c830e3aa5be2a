// # Reqwest Transport
//
// Default [`ApiTransport`] implementation for the netlify-api client,
// backed by `reqwest`.
//
// ## Responsibilities
//
// - Execute exactly one HTTP exchange per call
// - Carry a request timeout (30 seconds unless overridden)
// - Hand every server-produced response back verbatim, whatever its status
//
// Status interpretation, error mapping and JSON decoding are owned by the
// Operation layer in `netlify-api`; retries and backoff are owned by
// nobody, failures propagate to the caller.

use std::time::Duration;

use async_trait::async_trait;
use netlify_api::{ApiRequest, ApiResponse, ApiTransport, Error, Method, Result};

/// Default HTTP timeout for API requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Reqwest-backed HTTP transport
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with the default request timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_HTTP_TIMEOUT)
    }

    /// Create a transport with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client (custom TLS, proxies, pools)
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ApiTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        tracing::debug!("Executing {} {}", request.method, request.url);

        let mut builder = self.client.request(method, request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::transport(format!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(format!("Failed to read response: {}", e)))?;

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}
