//! Checks for the backend's `{"success": ..., "<payload>": ...}` replies.

use clubcheck_domain::{ResponseSpec, StatusExpectation};
use serde_json::Value;

/// Why a reply was not accepted.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Rejection {
    /// Status other than 200; carries the raw body.
    Status { status: u16, body: String },
    /// Body is not JSON.
    NotJson { error: String, body: String },
    /// JSON parsed but `success` is falsy or the payload key is absent.
    Envelope { details: String, data: Value },
}

/// Validates a reply and returns its parsed JSON.
pub(super) fn open(response: &ResponseSpec, key: Option<&str>) -> Result<Value, Rejection> {
    if !StatusExpectation::default().matches(response.status) {
        return Err(Rejection::Status {
            status: response.status,
            body: response.body.clone(),
        });
    }

    let data = response.body_as_json().map_err(|e| Rejection::NotJson {
        error: e.to_string(),
        body: response.body.clone(),
    })?;

    let succeeded = data.get("success").is_some_and(is_truthy);
    match key {
        Some(key) if !succeeded || data.get(key).is_none() => Err(Rejection::Envelope {
            details: format!("Success=false or missing {key} data"),
            data,
        }),
        None if !succeeded => Err(Rejection::Envelope {
            details: "Success=false in response".to_string(),
            data,
        }),
        _ => Ok(data),
    }
}

/// JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are falsy.
pub(super) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Renders an id field as text; the backend may use strings or numbers.
pub(super) fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
