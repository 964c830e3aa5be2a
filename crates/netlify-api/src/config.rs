//! Client configuration
//!
//! This module defines the configuration the client needs before it can
//! issue requests: the base API endpoint, the bearer access token and the
//! User-Agent header value.

use serde::{Deserialize, Serialize};

/// Default base endpoint for the Netlify API
pub const DEFAULT_ENDPOINT: &str = "https://api.netlify.com/api/v1";

/// Default User-Agent header value
pub const DEFAULT_USER_AGENT: &str = concat!("netlify-api/", env!("CARGO_PKG_VERSION"));

/// Client configuration
///
/// # Security
///
/// The Debug implementation intentionally does NOT expose the access token.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base API endpoint (scheme + host + version prefix)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Personal access token sent as a bearer credential
    /// ⚠️ NEVER log this value
    pub access_token: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration for the default endpoint
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            endpoint: default_endpoint(),
            access_token: access_token.into(),
            user_agent: default_user_agent(),
        }
    }

    /// Override the base endpoint (self-hosted gateways, test servers)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the User-Agent header value
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.access_token.is_empty() {
            return Err(crate::Error::config("Access token cannot be empty"));
        }
        if self.endpoint.is_empty() {
            return Err(crate::Error::config("Endpoint cannot be empty"));
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(crate::Error::config(format!(
                "Endpoint must be an http(s) URL: {}",
                self.endpoint
            )));
        }
        Ok(())
    }

    /// Base endpoint with any trailing slash removed
    pub(crate) fn base_endpoint(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }
}

// Custom Debug implementation that hides the access token
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("access_token", &"<REDACTED>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}
