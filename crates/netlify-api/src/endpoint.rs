//! Endpoint path templates

/// A relative path identifying one API resource or action
///
/// Stored without leading or trailing slashes; the operation layer joins it
/// onto the client's base endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(String);

impl Endpoint {
    /// Create an endpoint from a relative path (e.g. `"sites"`)
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self(path.trim_matches('/').to_string())
    }

    /// Append a path segment
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.trim_matches('/');
        if segment.is_empty() {
            return self.clone();
        }
        Self(format!("{}/{}", self.0, segment))
    }

    /// The relative path, without surrounding slashes
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
