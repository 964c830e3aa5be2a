// # netlify-api
//
// Typed client for the Netlify REST API (v1).
//
// ## Architecture Overview
//
// - **NetlifyClient**: configuration + injected transport + one factory
//   method per API operation
// - **Operation**: single-use fluent request builder (query parameters,
//   JSON body, request/response handlers), executed with `send`
// - **ApiTransport**: trait seam for the HTTP stack; the default reqwest
//   implementation lives in the `netlify-transport-reqwest` crate
// - **Models**: plain serde records mirroring API resource shapes
//
// ## Design Principles
//
// 1. **Plumbing only**: build requests, decode responses, map non-success
//    statuses to typed errors, nothing else
// 2. **Transport-agnostic**: the HTTP stack is injected behind a trait, so
//    tests run against recording doubles
// 3. **No hidden behavior**: no retries, no caching, no identity map;
//    every failure surfaces immediately
// 4. **Single-use operations**: one exchange per Operation value,
//    independent operations are fully independent

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod operation;
pub mod transport;

// Re-export core types for convenience
pub use client::NetlifyClient;
pub use config::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
pub use endpoint::Endpoint;
pub use error::{Error, ErrorPayload, Result};
pub use operation::{NoContent, Operation};
pub use transport::{ApiRequest, ApiResponse, ApiTransport, Method};
