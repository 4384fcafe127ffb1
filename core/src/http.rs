//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — executing the round-trip is the job of a
//! [`Transport`] implementation supplied by the host (ureq in the shipped
//! binary, a scripted fake in tests). This separation keeps the core
//! deterministic and easy to test.
//!
//! All fields use owned types (`String`, `Vec`) so values can move freely
//! between the core and whatever executes them.

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `BookClient::build_*` methods and handed to a [`Transport`]
/// for execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a [`Transport`] after executing an `HttpRequest`, then passed
/// to `BookClient::parse_*` methods for deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes one HTTP round-trip on behalf of the core.
///
/// A single attempt per call: no retry, no backoff, no timeout beyond
/// whatever the underlying transport applies on its own. Implementations
/// report connection-level failures as [`ApiError::NetworkError`]; any
/// response that arrived, whatever its status, is returned as data.
pub trait Transport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
