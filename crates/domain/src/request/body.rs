//! HTTP Request body types

use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// JSON request body.
///
/// The API under test only speaks JSON, so the body is either absent or a
/// serialized JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBody {
    /// The serialized JSON content; `None` means no body.
    pub content: Option<String>,
}

impl RequestBody {
    /// Creates an empty body.
    #[must_use]
    pub const fn none() -> Self {
        Self { content: None }
    }

    /// Serializes a value into a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBody` if the value cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> DomainResult<Self> {
        let content = serde_json::to_string(value).map_err(|e| DomainError::InvalidBody(e.to_string()))?;
        Ok(Self {
            content: Some(content),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_body() {
        let body = RequestBody::json(&serde_json::json!({"description": "Missing title"})).unwrap();
        assert_eq!(
            body.content.as_deref(),
            Some(r#"{"description":"Missing title"}"#)
        );
    }

    #[test]
    fn test_unserializable_body() {
        let mut map = std::collections::HashMap::new();
        map.insert((1, 2), "tuple keys are not JSON object keys");
        let result = RequestBody::json(&map);
        assert!(matches!(result, Err(DomainError::InvalidBody(_))));
    }
}
