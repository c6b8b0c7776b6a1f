//! Participant procedures.

use clubcheck_domain::{HttpMethod, ParticipantDraft};

use super::envelope::id_text;
use super::{BackendSuite, Procedure};
use crate::ports::{Clock, HttpClient};

impl<C: HttpClient, K: Clock> BackendSuite<C, K> {
    /// `POST /participants`: registers a team for the created event.
    pub async fn create_participant(&mut self) -> bool {
        let procedure = Procedure::CreateParticipant;
        let Some(id) = self.fixture_event_id(procedure) else {
            return false;
        };
        let draft = ParticipantDraft::team(id.clone());
        let sent = self.send_json(HttpMethod::Post, "/participants", &draft).await;
        let Some(data) = self.expect_envelope(procedure, sent, Some("participant")) else {
            return false;
        };

        if data["participant"].get("event_id").and_then(id_text).as_deref() == Some(id.as_str()) {
            self.pass(procedure, "Participant registered successfully")
        } else {
            self.fail_with(procedure, "Event ID mismatch in participant", data.to_string())
        }
    }

    /// `GET /participants/{eventId}`
    pub async fn get_participants_for_event(&mut self) -> bool {
        let procedure = Procedure::GetParticipantsForEvent;
        let Some(id) = self.fixture_event_id(procedure) else {
            return false;
        };
        let sent = self.send(HttpMethod::Get, &format!("/participants/{id}")).await;
        let Some(data) = self.expect_envelope(procedure, sent, Some("participants")) else {
            return false;
        };
        let Some(participants) = data["participants"].as_array() else {
            return self.fail_with(procedure, "Field 'participants' is not a list", data.to_string());
        };

        self.pass(
            procedure,
            format!("Retrieved {} participants for event", participants.len()),
        )
    }

    /// `GET /participants/count`: `count` must be a non-negative integer.
    pub async fn get_participant_count(&mut self) -> bool {
        let procedure = Procedure::GetParticipantCount;
        let sent = self.send(HttpMethod::Get, "/participants/count").await;
        let Some(data) = self.expect_envelope(procedure, sent, Some("count")) else {
            return false;
        };

        match data["count"].as_u64() {
            Some(count) => self.pass(procedure, format!("Total participants: {count}")),
            None => self.fail_with(
                procedure,
                format!("Count is not a non-negative integer: {}", data["count"]),
                data.to_string(),
            ),
        }
    }
}
