//! Request payloads sent to the club backend.
//!
//! Field names follow the backend's JSON contract (snake_case).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single field of an event's registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Stable field identifier.
    pub id: String,
    /// Input type (`text`, `email`, `number`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Label shown to registrants; also the key of participant responses.
    pub label: String,
    /// Whether a response is mandatory.
    pub required: bool,
}

impl FormField {
    /// Creates a form field.
    #[must_use]
    pub fn new(id: &str, kind: &str, label: &str, required: bool) -> Self {
        Self {
            id: id.to_string(),
            kind: kind.to_string(),
            label: label.to_string(),
            required,
        }
    }
}

/// Body of `POST /events`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    /// Event title.
    pub title: String,
    /// Event description.
    pub description: String,
    /// When the event takes place.
    pub event_date: DateTime<Utc>,
    /// Whether the event is listed as active.
    pub is_active: bool,
    /// Whether registrations are accepted.
    pub registration_open: bool,
    /// Banner image URL.
    pub banner_url: String,
    /// Registration form definition.
    #[serde(default)]
    pub form_fields: Vec<FormField>,
}

impl EventDraft {
    /// The hackathon event created at the start of every run.
    #[must_use]
    pub fn hackathon(event_date: DateTime<Utc>) -> Self {
        Self {
            title: "Test Hackathon 2025".to_string(),
            description: "24-hour coding marathon for testing purposes".to_string(),
            event_date,
            is_active: true,
            registration_open: true,
            banner_url: "https://example.com/banner.jpg".to_string(),
            form_fields: Vec::new(),
        }
    }
}

/// Body of `PUT /events/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventUpdate {
    /// New title.
    pub title: String,
    /// New description.
    pub description: String,
    /// Replacement registration form.
    pub form_fields: Vec<FormField>,
}

impl EventUpdate {
    /// Renames the hackathon and gives it a three-field registration form.
    #[must_use]
    pub fn hackathon_with_form() -> Self {
        Self {
            title: "Updated Hackathon 2025".to_string(),
            description: "Updated 24-hour coding marathon with new features".to_string(),
            form_fields: vec![
                FormField::new("field-1", "text", "Team Name", true),
                FormField::new("field-2", "email", "Email", true),
                FormField::new("field-3", "number", "Team Size", false),
            ],
        }
    }
}

/// Body of `POST /participants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantDraft {
    /// Event being registered for.
    pub event_id: String,
    /// Form responses keyed by field label.
    pub responses: BTreeMap<String, serde_json::Value>,
}

impl ParticipantDraft {
    /// A team registration matching `EventUpdate::hackathon_with_form`.
    #[must_use]
    pub fn team(event_id: impl Into<String>) -> Self {
        let mut responses = BTreeMap::new();
        responses.insert("Team Name".to_string(), "Tech Innovators".into());
        responses.insert("Email".to_string(), "test@example.com".into());
        responses.insert("Team Size".to_string(), 4.into());
        Self {
            event_id: event_id.into(),
            responses,
        }
    }

    /// A minimal registration with a single `name` response.
    #[must_use]
    pub fn named(event_id: impl Into<String>, name: &str) -> Self {
        let mut responses = BTreeMap::new();
        responses.insert("name".to_string(), name.into());
        Self {
            event_id: event_id.into(),
            responses,
        }
    }
}

/// Body of `POST /contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Message text.
    pub message: String,
}

impl ContactSubmission {
    /// The inquiry submitted by every run.
    #[must_use]
    pub fn inquiry() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            message: "Test message for IEEE Club hackathon inquiry".to_string(),
        }
    }
}
