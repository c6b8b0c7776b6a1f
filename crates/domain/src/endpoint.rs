//! API base URL handling
//!
//! The backend mounts every route under a common prefix (usually `/api`).
//! `ApiBase` keeps that prefix intact when joining route paths onto it,
//! which `Url::join` alone would not do for relative segments.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{DomainError, DomainResult};

/// Validated base URL of the API under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase {
    url: Url,
}

impl ApiBase {
    /// Parses and validates a base URL.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if the URL is malformed, is not
    /// `http`/`https`, or carries a query string or fragment.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidUrl("URL is required".to_string()));
        }

        let url = Url::parse(trimmed).map_err(|e| DomainError::InvalidUrl(format!("{e}: {trimmed}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(DomainError::InvalidUrl(format!(
                "URL must start with http:// or https://: {trimmed}"
            )));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(DomainError::InvalidUrl(format!(
                "base URL must not carry a query or fragment: {trimmed}"
            )));
        }

        Ok(Self { url })
    }

    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.url.as_str().trim_end_matches('/')
    }

    /// Joins a route path onto the base.
    ///
    /// `path` may include a query string (`/events?limit=5`).
    /// `endpoint("/")` yields the base with a trailing slash.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.as_str(), path)
    }
}

impl FromStr for ApiBase {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_endpoint_keeps_prefix() {
        let base = ApiBase::parse("https://club.example.com/api").unwrap();
        assert_eq!(base.endpoint("/events"), "https://club.example.com/api/events");
        assert_eq!(
            base.endpoint("events/abc"),
            "https://club.example.com/api/events/abc"
        );
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let base = ApiBase::parse("http://localhost:3000/api/").unwrap();
        assert_eq!(base.as_str(), "http://localhost:3000/api");
        assert_eq!(base.endpoint("/"), "http://localhost:3000/api/");
    }

    #[test]
    fn test_endpoint_with_query() {
        let base: ApiBase = "http://127.0.0.1:8080/api".parse().unwrap();
        assert_eq!(
            base.endpoint("/events?limit=5"),
            "http://127.0.0.1:8080/api/events?limit=5"
        );
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(ApiBase::parse("").is_err());
        assert!(ApiBase::parse("not a url").is_err());
        assert!(ApiBase::parse("ftp://example.com/api").is_err());
        assert!(ApiBase::parse("https://example.com/api?x=1").is_err());
    }
}
