//! Test doubles and common utilities for client contract tests
//!
//! `MockTransport` records every request it sees and replays queued canned
//! responses, so contract tests can assert the exact verb, path, headers
//! and body each factory method produces without any network I/O.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use netlify_api::error::Result;
use netlify_api::{ApiRequest, ApiResponse, ApiTransport, ClientConfig, NetlifyClient};

/// A transport double that records requests and replays queued responses
pub struct MockTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<ApiResponse>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
        }
    }

    /// Queue a canned response (served in FIFO order)
    ///
    /// With nothing queued, the transport answers `200` with an empty JSON
    /// object, which decodes into any all-optional model.
    pub fn queue(&self, status: u16, body: impl Into<String>) {
        self.responses.lock().unwrap().push_back(ApiResponse {
            status,
            headers: Vec::new(),
            body: body.into(),
        });
    }

    /// Requests seen so far, in send order
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request seen so far
    pub fn single_request(&self) -> ApiRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait::async_trait]
impl ApiTransport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(request);
        let response = self.responses.lock().unwrap().pop_front();
        Ok(response.unwrap_or(ApiResponse {
            status: 200,
            headers: Vec::new(),
            body: "{}".to_string(),
        }))
    }
}

/// A client wired to a fresh recording transport with the default endpoint
pub fn test_client() -> (NetlifyClient, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::new());
    let client = NetlifyClient::new(ClientConfig::new("test-token"), transport.clone())
        .expect("test config is valid");
    (client, transport)
}

/// Expected absolute URL for a relative path under the default endpoint
pub fn api_url(path: &str) -> String {
    format!("{}/{}", netlify_api::DEFAULT_ENDPOINT, path)
}
