//! Negative-path checks.
//!
//! The backend's error contract is loose, so each scenario accepts a set
//! of error statuses rather than a single code.

use clubcheck_domain::{HttpMethod, ParticipantDraft, ResponseSpec, StatusExpectation};
use serde_json::json;

use super::{BackendSuite, Procedure};
use crate::error::ApplicationResult;
use crate::ports::{Clock, HttpClient};

/// Event id that no backend should know.
pub const UNKNOWN_EVENT_ID: &str = "non-existent-id";

/// Event id used for the orphan participant registration.
pub const UNKNOWN_PARTICIPANT_EVENT_ID: &str = "non-existent-event-id";

struct Scenario {
    /// Subject of the "returned N" message.
    subject: &'static str,
    /// Message printed when the scenario holds.
    handled: &'static str,
    /// Noun used in transport error messages.
    topic: &'static str,
    expected: StatusExpectation,
}

impl<C: HttpClient, K: Clock> BackendSuite<C, K> {
    /// Three error scenarios; passes only when all are handled.
    pub async fn error_handling(&mut self) -> bool {
        let procedure = Procedure::ErrorHandling;

        let scenarios = [
            Scenario {
                subject: "Non-existent event",
                handled: "Non-existent event returns 404",
                topic: "non-existent event",
                expected: StatusExpectation::exact(404),
            },
            Scenario {
                subject: "Invalid event data",
                handled: "Invalid event data handled properly",
                topic: "invalid event",
                expected: StatusExpectation::one_of(&[400, 500]),
            },
            Scenario {
                subject: "Invalid participant registration",
                handled: "Invalid participant registration handled properly",
                topic: "invalid participant",
                expected: StatusExpectation::one_of(&[400, 404, 500]),
            },
        ];

        let mut handled = 0usize;

        let sent = self
            .send(HttpMethod::Get, &format!("/events/{UNKNOWN_EVENT_ID}"))
            .await;
        if self.judge(&scenarios[0], sent) {
            handled += 1;
        }

        let sent = self
            .send_json(HttpMethod::Post, "/events", &json!({"description": "Missing title"}))
            .await;
        if self.judge(&scenarios[1], sent) {
            handled += 1;
        }

        let orphan = ParticipantDraft::named(UNKNOWN_PARTICIPANT_EVENT_ID, "Test");
        let sent = self.send_json(HttpMethod::Post, "/participants", &orphan).await;
        if self.judge(&scenarios[2], sent) {
            handled += 1;
        }

        let details = format!(
            "{handled}/{} error scenarios handled correctly",
            scenarios.len()
        );
        if handled == scenarios.len() {
            self.pass(procedure, details)
        } else {
            self.fail(procedure, details)
        }
    }

    fn judge(&mut self, scenario: &Scenario, sent: ApplicationResult<ResponseSpec>) -> bool {
        let (passed, message) = match sent {
            Ok(response) if scenario.expected.matches(response.status) => {
                (true, scenario.handled.to_string())
            }
            Ok(response) => (
                false,
                format!(
                    "{} returned {} instead of {}",
                    scenario.subject,
                    response.status,
                    scenario.expected.description()
                ),
            ),
            Err(e) => (false, format!("Error testing {}: {e}", scenario.topic)),
        };

        tracing::debug!(passed, %message, "error scenario");
        self.reporter.sub_check(passed, &message);
        passed
    }
}
