//! Request specification type

use super::{HttpMethod, RequestBody};

/// Per-call timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Complete specification for an HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute target URL
    pub url: String,
    /// HTTP headers, in send order
    pub headers: Vec<(String, String)>,
    /// Request body
    pub body: RequestBody,
    /// Timeout for the whole call in milliseconds
    pub timeout_ms: u64,
}

impl RequestSpec {
    /// Creates a request with no headers and no body.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: RequestBody::none(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Adds a header (builder pattern).
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the body (builder pattern).
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Sets the timeout (builder pattern).
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Returns the value of a header (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_get_request() {
        let req = RequestSpec::new(HttpMethod::Get, "https://api.example.com/api/events");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "https://api.example.com/api/events");
        assert_eq!(req.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(req.body, RequestBody::none());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let req = RequestSpec::new(HttpMethod::Delete, "http://localhost/api/events/1")
            .with_header("Accept", "application/json")
            .with_timeout_ms(2_000);
        assert_eq!(req.header("accept"), Some("application/json"));
        assert_eq!(req.header("Authorization"), None);
        assert_eq!(req.timeout_ms, 2_000);
    }
}
