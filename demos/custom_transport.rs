//! Minimal embedding example for netlify-api
//!
//! Demonstrates using the client with a custom [`ApiTransport`] and
//! client-level request/response handlers. The transport here is an
//! in-process stub, so the example runs without network access or a real
//! token.

use std::sync::Arc;

use netlify_api::error::Result;
use netlify_api::{ApiRequest, ApiResponse, ApiTransport, ClientConfig, NetlifyClient};

/// Transport that serves canned responses from memory
struct CannedTransport;

#[async_trait::async_trait]
impl ApiTransport for CannedTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        tracing::info!("would send {} {}", request.method, request.url);

        let body = if request.url.ends_with("/sites") {
            r#"[{"id":"demo-site","name":"demo","url":"https://demo.example.net"}]"#
        } else {
            r#"{"id":"demo-site","name":"demo","url":"https://demo.example.net"}"#
        };

        Ok(ApiResponse {
            status: 200,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: body.to_string(),
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let client = NetlifyClient::new(
        ClientConfig::new("demo-token"),
        Arc::new(CannedTransport),
    )?
    .with_request_handler(|req| {
        req.set_header("X-Demo-Run", "1");
        tracing::info!("pre-send hook saw {} {}", req.method, req.url);
    })
    .with_response_handler(|resp| {
        tracing::info!("post-receive hook saw status {}", resp.status);
    });

    let sites = client.list_sites().send().await?;
    tracing::info!("decoded {} site(s)", sites.len());

    let site = client
        .get_site("demo-site")
        .with_response_handler(|resp| {
            tracing::info!("operation-level hook: {} bytes", resp.body.len());
        })
        .send()
        .await?;
    tracing::info!("site name: {}", site.name.as_deref().unwrap_or("-"));

    Ok(())
}
