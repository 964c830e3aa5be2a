// # HTTP Transport Abstraction
//
// Every request the client issues goes through an injected [`ApiTransport`].
// The default implementation lives in the `netlify-transport-reqwest` crate;
// tests substitute recording doubles.
//
// Transports are deliberately dumb:
//
// - Execute exactly one HTTP exchange per call
// - Never interpret status codes (owned by the Operation layer)
// - Never retry, back off or cache (owned by the caller, if anywhere)

use async_trait::async_trait;

use crate::error::Result;

/// HTTP verbs used by the API surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl Method {
    /// The verb as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One outgoing HTTP request, fully assembled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP verb
    pub method: Method,
    /// Absolute URL including any query string
    pub url: String,
    /// Header name/value pairs, in send order
    pub headers: Vec<(String, String)>,
    /// JSON payload, already serialized
    pub body: Option<String>,
}

impl ApiRequest {
    /// First header value matching `name` (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Replace a header, or append it if not present
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        for (header, existing) in &mut self.headers {
            if header.eq_ignore_ascii_case(&name) {
                *existing = value;
                return;
            }
        }
        self.headers.push((name, value));
    }
}

/// One HTTP response, as handed back by the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Header name/value pairs
    pub headers: Vec<(String, String)>,
    /// Response body text
    pub body: String,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First header value matching `name` (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Pre-send handler with mutable access to the outgoing request
pub type RequestHandler = dyn Fn(&mut ApiRequest) + Send + Sync;

/// Post-receive handler with shared access to the response
pub type ResponseHandler = dyn Fn(&ApiResponse) + Send + Sync;

/// Trait for HTTP transport implementations
///
/// # Thread Safety
///
/// Implementations must be thread-safe and usable across async tasks.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Execute one request and return the raw response
    ///
    /// Implementations return `Ok` for every response the server produced,
    /// whatever its status; `Err` is reserved for exchanges that never
    /// completed (connection, TLS, timeout).
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}
