//! The transport seam: plain-data HTTP types and the async trait the client
//! executes requests through.
//!
//! # Design
//! Requests and responses are described as plain data so the client's request
//! building and response mapping stay deterministic and testable without a
//! network. The [`HttpTransport`] trait closes the loop: the client hands it
//! an [`HttpRequest`] and gets back either an [`HttpResponse`] or a
//! [`TransportError`].
//!
//! A non-2xx status is NOT a transport error. The transport returns any
//! response it managed to obtain as `Ok`; interpreting status codes belongs
//! to the client. `TransportError` is reserved for failures that produced no
//! usable response at all.

use async_trait::async_trait;
use thiserror::Error;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data. Header names keep whatever
/// casing the transport reports; lookups must be case-insensitive.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// A failure that yielded no usable response.
///
/// These are passed through to the caller unchanged — the client never wraps
/// them in a domain error, retries, or logs them.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never completed: connection refused, DNS failure, the
    /// connection dropped mid-response, and so on.
    #[error("request failed: {0}")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A body could not be serialized to, or deserialized from, JSON.
    #[error("invalid JSON body: {0}")]
    Body(#[from] serde_json::Error),
}

/// Executes a single HTTP round trip.
///
/// Implementations must surface every response they obtain — including 4xx
/// and 5xx — as `Ok`, and reserve `Err` for failures with no response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
