//! Response specification type
//!
//! Contains the status, headers, body and timing of one HTTP call.

use std::collections::HashMap;
use std::time::Duration;

/// HTTP response specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: u16,
    /// Response headers as a map.
    pub headers: HashMap<String, String>,
    /// Response body as string.
    pub body: String,
    /// Response time.
    pub duration: Duration,
}

impl ResponseSpec {
    /// Creates a new `ResponseSpec` from raw response data.
    ///
    /// Bodies that are not valid UTF-8 are decoded lossily.
    #[must_use]
    pub fn new(
        status: u16,
        headers: HashMap<String, String>,
        body: Vec<u8>,
        duration: Duration,
    ) -> Self {
        let body = String::from_utf8(body)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());

        Self {
            status,
            headers,
            body,
            duration,
        }
    }

    /// Creates a JSON response; convenient for adapters and tests.
    #[must_use]
    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self::new(status, headers, value.to_string().into_bytes(), Duration::ZERO)
    }

    /// Attempts to parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the parser error if the body is not valid JSON.
    pub fn body_as_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_body_as_json() {
        let response = ResponseSpec::json(200, &serde_json::json!({"success": true, "count": 3}));
        let json = response.body_as_json().unwrap();
        assert_eq!(json["count"], 3);

        let html = ResponseSpec::new(502, HashMap::new(), b"<html>".to_vec(), Duration::ZERO);
        assert!(html.body_as_json().is_err());
    }

    #[test]
    fn test_lossy_body() {
        let response = ResponseSpec::new(200, HashMap::new(), vec![0x66, 0xff, 0x6f], Duration::ZERO);
        assert_eq!(response.body, "f\u{fffd}o");
    }
}
