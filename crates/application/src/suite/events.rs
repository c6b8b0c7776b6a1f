//! Event procedures: health check and the event CRUD cycle.

use chrono::TimeDelta;
use clubcheck_domain::{EventDraft, EventUpdate, FormField, HttpMethod, StatusExpectation};
use serde_json::Value;

use super::envelope::{id_text, is_truthy};
use super::{BackendSuite, Procedure};
use crate::ports::{Clock, HttpClient};

/// How far ahead of "now" the created event is dated.
const EVENT_LEAD_DAYS: i64 = 30;

/// Page size requested by `get_events_with_limit`.
pub const EVENTS_LIMIT: usize = 5;

impl<C: HttpClient, K: Clock> BackendSuite<C, K> {
    /// `GET /`: the API answers 200 with its banner in `message`.
    pub async fn health_check(&mut self) -> bool {
        let procedure = Procedure::HealthCheck;
        let response = match self.send(HttpMethod::Get, "/").await {
            Ok(response) => response,
            Err(e) => return self.fail(procedure, format!("Connection error: {e}")),
        };

        if !StatusExpectation::default().matches(response.status) {
            return self.fail(
                procedure,
                format!("Status: {}, Response: {}", response.status, response.body),
            );
        }

        match response.body_as_json() {
            Ok(data) => {
                let message = data.get("message").and_then(Value::as_str).unwrap_or_default();
                if message.contains(self.config.health_banner.as_str()) {
                    self.pass(procedure, "API is responding correctly")
                } else {
                    self.fail(procedure, format!("Unexpected response: {data}"))
                }
            }
            Err(e) => self.fail_with(procedure, format!("Invalid JSON response: {e}"), response.body),
        }
    }

    /// `POST /events`: creates the event later procedures work on.
    pub async fn create_event(&mut self) -> bool {
        let procedure = Procedure::CreateEvent;
        let draft = EventDraft::hackathon(self.clock.now() + TimeDelta::days(EVENT_LEAD_DAYS));
        let sent = self.send_json(HttpMethod::Post, "/events", &draft).await;
        let Some(data) = self.expect_envelope(procedure, sent, Some("event")) else {
            return false;
        };

        match data["event"].get("id").and_then(id_text) {
            Some(id) => {
                let details = format!("Event created with ID: {id}");
                self.created_event_id = Some(id);
                self.pass(procedure, details)
            }
            None => self.fail_with(procedure, "Event data missing id", data.to_string()),
        }
    }

    /// `GET /events`
    pub async fn get_all_events(&mut self) -> bool {
        let procedure = Procedure::GetAllEvents;
        let sent = self.send(HttpMethod::Get, "/events").await;
        let Some(data) = self.expect_envelope(procedure, sent, Some("events")) else {
            return false;
        };
        let Some(events) = data["events"].as_array() else {
            return self.fail_with(procedure, "Field 'events' is not a list", data.to_string());
        };

        self.pass(procedure, format!("Retrieved {} events", events.len()))
    }

    /// `GET /events?active=true`, counting active entries client-side.
    pub async fn get_active_events(&mut self) -> bool {
        let procedure = Procedure::GetActiveEvents;
        let sent = self.send(HttpMethod::Get, "/events?active=true").await;
        let Some(data) = self.expect_envelope(procedure, sent, Some("events")) else {
            return false;
        };
        let Some(events) = data["events"].as_array() else {
            return self.fail_with(procedure, "Field 'events' is not a list", data.to_string());
        };

        let active = events
            .iter()
            .filter(|event| event.get("is_active").is_some_and(is_truthy))
            .count();
        self.pass(procedure, format!("Retrieved {active} active events"))
    }

    /// `GET /events?limit=5`; more than the limit is a failure.
    pub async fn get_events_with_limit(&mut self) -> bool {
        let procedure = Procedure::GetEventsWithLimit;
        let sent = self
            .send(HttpMethod::Get, &format!("/events?limit={EVENTS_LIMIT}"))
            .await;
        let Some(data) = self.expect_envelope(procedure, sent, Some("events")) else {
            return false;
        };
        let Some(events) = data["events"].as_array() else {
            return self.fail_with(procedure, "Field 'events' is not a list", data.to_string());
        };

        let count = events.len();
        if count > EVENTS_LIMIT {
            return self.fail_with(
                procedure,
                format!("Retrieved {count} events, expected at most {EVENTS_LIMIT}"),
                data.to_string(),
            );
        }
        self.pass(procedure, format!("Retrieved {count} events (max {EVENTS_LIMIT})"))
    }

    /// `GET /events/{id}`: returns the created event.
    pub async fn get_single_event(&mut self) -> bool {
        let procedure = Procedure::GetSingleEvent;
        let Some(id) = self.fixture_event_id(procedure) else {
            return false;
        };
        let sent = self.send(HttpMethod::Get, &format!("/events/{id}")).await;
        let Some(data) = self.expect_envelope(procedure, sent, Some("event")) else {
            return false;
        };

        let event = &data["event"];
        if event.get("id").and_then(id_text).as_deref() == Some(id.as_str()) {
            let title = event.get("title").and_then(Value::as_str).unwrap_or("<untitled>");
            let details = format!("Retrieved event: {title}");
            self.pass(procedure, details)
        } else {
            self.fail_with(procedure, "Event ID mismatch", data.to_string())
        }
    }

    /// `PUT /events/{id}`: new title and a three-field form come back as sent.
    pub async fn update_event(&mut self) -> bool {
        let procedure = Procedure::UpdateEvent;
        let Some(id) = self.fixture_event_id(procedure) else {
            return false;
        };
        let update = EventUpdate::hackathon_with_form();
        let sent = self
            .send_json(HttpMethod::Put, &format!("/events/{id}"), &update)
            .await;
        let Some(data) = self.expect_envelope(procedure, sent, Some("event")) else {
            return false;
        };

        let event = &data["event"];
        let title_matches = event.get("title").and_then(Value::as_str) == Some(update.title.as_str());
        let fields: Option<Vec<FormField>> = event
            .get("form_fields")
            .and_then(|fields| serde_json::from_value(fields.clone()).ok());

        match fields {
            Some(fields) if title_matches && fields == update.form_fields => {
                self.pass(procedure, "Event updated successfully with form fields")
            }
            _ => self.fail_with(procedure, "Update data not reflected correctly", data.to_string()),
        }
    }

    /// `DELETE /events/{id}`: removes the created event.
    pub async fn delete_event(&mut self) -> bool {
        let procedure = Procedure::DeleteEvent;
        let Some(id) = self.fixture_event_id(procedure) else {
            return false;
        };
        let sent = self.send(HttpMethod::Delete, &format!("/events/{id}")).await;
        if self.expect_envelope(procedure, sent, None).is_none() {
            return false;
        }

        self.pass(procedure, "Event deleted successfully")
    }
}
