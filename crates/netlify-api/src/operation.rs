//! Single-use request builders
//!
//! An [`Operation`] is one configured request/response exchange bound to an
//! endpoint and verb. The client's factory methods pre-populate endpoint,
//! verb and body; the caller may add query parameters and per-operation
//! handlers before triggering [`send`](Operation::send).
//!
//! ## Exchange Flow
//!
//! 1. Assemble URL (base endpoint + path + encoded query string)
//! 2. Serialize the JSON body, if any
//! 3. Invoke request handlers (client-level first, then operation-level)
//! 4. Execute through the injected transport
//! 5. Non-success status → typed error with the parsed error body
//! 6. Invoke response handlers (client-level first, then operation-level)
//! 7. Decode the JSON body into the declared response type

use std::marker::PhantomData;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::client::NetlifyClient;
use crate::endpoint::Endpoint;
use crate::error::{Error, ErrorPayload, Result};
use crate::transport::{ApiRequest, ApiResponse, Method, RequestHandler, ResponseHandler};

/// Response type for operations whose success response carries no body
///
/// Decodes from the `null` the operation layer substitutes for an empty
/// body, so `send` on e.g. a delete resolves without touching JSON content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct NoContent;

/// One configured, single-use request/response exchange
///
/// Consumed by [`send`](Operation::send); build a fresh operation from the
/// client for every exchange. Independent operations are fully independent.
pub struct Operation<T> {
    client: NetlifyClient,
    endpoint: Endpoint,
    method: Method,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    request_handler: Option<Box<RequestHandler>>,
    response_handler: Option<Box<ResponseHandler>>,
    _response: PhantomData<fn() -> T>,
}

impl<T> Operation<T> {
    /// Create an operation bound to an endpoint and verb
    ///
    /// The client's factory methods cover the documented API surface; this
    /// constructor is public so callers can reach endpoints added upstream
    /// before the catalog catches up.
    pub fn new(client: NetlifyClient, endpoint: Endpoint, method: Method) -> Self {
        Self {
            client,
            endpoint,
            method,
            query: Vec::new(),
            body: None,
            request_handler: None,
            response_handler: None,
            _response: PhantomData,
        }
    }

    /// Attach a pre-serialized JSON body
    pub fn with_body_value(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Append one query parameter
    ///
    /// Keys and values are percent-encoded independently when the URL is
    /// assembled; pass them raw.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Install an operation-level pre-send handler
    ///
    /// Runs after the client-level handler, with mutable access to the
    /// outgoing request.
    pub fn with_request_handler(
        mut self,
        handler: impl Fn(&mut ApiRequest) + Send + Sync + 'static,
    ) -> Self {
        self.request_handler = Some(Box::new(handler));
        self
    }

    /// Install an operation-level post-receive handler
    ///
    /// Runs after the client-level handler, on success responses only.
    pub fn with_response_handler(
        mut self,
        handler: impl Fn(&ApiResponse) + Send + Sync + 'static,
    ) -> Self {
        self.response_handler = Some(Box::new(handler));
        self
    }

    /// Full request URL: base endpoint + path + encoded query string
    fn url(&self) -> String {
        let base = format!(
            "{}/{}",
            self.client.config().base_endpoint(),
            self.endpoint.as_str()
        );
        if self.query.is_empty() {
            base
        } else {
            format!("{}?{}", base, query_string(&self.query))
        }
    }

    /// Execute the exchange and return the validated raw response
    async fn dispatch(self) -> Result<ApiResponse> {
        let url = self.url();
        let Operation {
            client,
            method,
            body,
            request_handler,
            response_handler,
            ..
        } = self;

        let body = match &body {
            Some(value) => Some(serde_json::to_string(value)?),
            None => None,
        };

        let config = client.config();
        let mut headers = vec![
            (
                "Authorization".to_string(),
                format!("Bearer {}", config.access_token),
            ),
            ("User-Agent".to_string(), config.user_agent.clone()),
        ];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        let mut request = ApiRequest {
            method,
            url,
            headers,
            body,
        };

        if let Some(handler) = client.request_handler() {
            handler(&mut request);
        }
        if let Some(handler) = &request_handler {
            handler(&mut request);
        }

        tracing::debug!("{} {}", request.method, request.url);
        let response = client.transport().execute(request).await?;
        tracing::debug!("API response status: {}", response.status);

        if !response.is_success() {
            return Err(Error::api(
                response.status,
                ErrorPayload::from_raw(&response.body),
            ));
        }

        if let Some(handler) = client.response_handler() {
            handler(&response);
        }
        if let Some(handler) = &response_handler {
            handler(&response);
        }

        Ok(response)
    }
}

impl<T: DeserializeOwned> Operation<T> {
    /// Send the request and decode the response
    ///
    /// Empty success bodies decode as JSON `null`, which is what
    /// [`NoContent`] operations expect.
    pub async fn send(self) -> Result<T> {
        let response = self.dispatch().await?;
        let body = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };
        serde_json::from_str(body).map_err(Error::from)
    }
}

/// Percent-encode each key and value independently and join with `&`
fn query_string(query: &[(String, String)]) -> String {
    query
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode(component: &str) -> String {
    url::form_urlencoded::byte_serialize(component.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn query_components_are_encoded_independently() {
        let query = pairs(&[("name", "my site"), ("filter", "a&b=c")]);
        assert_eq!(query_string(&query), "name=my+site&filter=a%26b%3Dc");
    }

    #[test]
    fn query_encodes_non_ascii() {
        let query = pairs(&[("name", "café")]);
        assert_eq!(query_string(&query), "name=caf%C3%A9");
    }

    #[test]
    fn no_content_decodes_from_null() {
        let decoded: NoContent = serde_json::from_str("null").unwrap();
        assert_eq!(decoded, NoContent);
    }
}
