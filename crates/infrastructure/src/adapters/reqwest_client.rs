//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! Every status code is returned as a response; only transport failures
//! become errors.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use clubcheck_application::ports::{HttpClient, HttpClientError};
use clubcheck_domain::{HttpMethod, RequestSpec, ResponseSpec};
use reqwest::{Client, Method, Url};

const MAX_REDIRECTS: usize = 10;

/// HTTP client implementation using reqwest.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "clubcheck/<version>"
    ///
    /// Timeouts are applied per request from `RequestSpec::timeout_ms`.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(concat!("clubcheck/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }

        let host = error
            .url()
            .and_then(Url::host_str)
            .unwrap_or("unknown")
            .to_string();

        if error.is_connect() {
            let message = error_chain(error);
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return HttpClientError::DnsError { host, message };
            }
            if lowered.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host,
                    port: error
                        .url()
                        .and_then(Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects { max: MAX_REDIRECTS };
        }

        if error.is_builder() {
            return HttpClientError::InvalidUrl(error_chain(error));
        }

        HttpClientError::Other(error_chain(error))
    }
}

/// Joins an error with its sources; reqwest keeps the useful part
/// ("Connection refused") in the source chain.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, HttpClientError> {
        let url = Url::parse(&request.url)
            .map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {}", request.url)))?;
        let timeout_ms = request.timeout_ms;

        let start = Instant::now();

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url)
            .timeout(Duration::from_millis(timeout_ms));

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(content) = &request.body.content {
            if request.header("content-type").is_none() {
                builder = builder.header("Content-Type", "application/json");
            }
            builder = builder.body(content.clone());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, timeout_ms))?;

        let status = response.status().as_u16();

        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| Self::map_error(&e, timeout_ms))?
            .to_vec();

        let duration = start.elapsed();
        tracing::trace!(status, bytes = body.len(), "response body read");

        Ok(ResponseSpec::new(status, headers, body, duration))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(ReqwestHttpClient::to_reqwest_method(HttpMethod::Get), Method::GET);
        assert_eq!(ReqwestHttpClient::to_reqwest_method(HttpMethod::Post), Method::POST);
        assert_eq!(ReqwestHttpClient::to_reqwest_method(HttpMethod::Put), Method::PUT);
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Delete),
            Method::DELETE
        );
    }

    #[test]
    fn test_client_creation() {
        let client = ReqwestHttpClient::new();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected() {
        let client = ReqwestHttpClient::new().unwrap();
        let request = RequestSpec::new(HttpMethod::Get, "not a url");
        let result = client.execute(&request).await;
        assert!(matches!(result, Err(HttpClientError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_closed_port_is_a_transport_error() {
        // Bind then drop to find a port nothing listens on.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = ReqwestHttpClient::new().unwrap();
        let request =
            RequestSpec::new(HttpMethod::Get, format!("http://127.0.0.1:{port}/api/")).with_timeout_ms(2_000);

        let result = client.execute(&request).await;

        assert!(
            matches!(
                result,
                Err(HttpClientError::ConnectionRefused { .. } | HttpClientError::ConnectionFailed(_))
            ),
            "unexpected result: {result:?}"
        );
    }
}
