//! HTTP Client port

use std::sync::Arc;

use async_trait::async_trait;
use clubcheck_domain::{RequestSpec, ResponseSpec};
use thiserror::Error;

/// Errors raised by an `HttpClient` before a response was received.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpClientError {
    /// The call did not complete within its timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout that elapsed.
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("could not resolve host '{host}': {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Resolver message.
        message: String,
    },

    /// Nothing is listening at the target address.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The connection failed for another reason (TLS, reset, ...).
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The redirect limit was exceeded.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// Redirect limit.
        max: usize,
    },

    /// The request URL is invalid.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the suite to be independent of specific HTTP libraries.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Executes an HTTP request and returns the response.
    ///
    /// Any status code, including 4xx and 5xx, is a successful call.
    ///
    /// # Errors
    ///
    /// Returns an error if no response was received: network issues,
    /// timeout, or an unsendable request.
    async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, HttpClientError>;
}

#[async_trait]
impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, HttpClientError> {
        (**self).execute(request).await
    }
}
