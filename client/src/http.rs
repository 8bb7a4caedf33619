//! HTTP requests and responses as plain data.
//!
//! # Design
//! The client builds `HttpRequest` values and parses `HttpResponse` values
//! as pure functions; only [`crate::transport`] touches the network. This
//! keeps the request/response mapping layer deterministic and testable with
//! handcrafted values. All fields are owned types so values can be moved
//! across threads and stored in test fixtures without lifetime concerns.

/// HTTP method for a request. Only the methods the accounts API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `AccountClient::build_*` methods and executed by
/// [`crate::transport::execute`]. `url` is absolute, query string included.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by the transport (or constructed directly in tests), then passed
/// to `AccountClient::parse_*` methods for status interpretation and
/// envelope decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
