//! Contact form procedure.

use clubcheck_domain::{ContactSubmission, HttpMethod};
use serde_json::Value;

use super::{BackendSuite, Procedure};
use crate::ports::{Clock, HttpClient};

impl<C: HttpClient, K: Clock> BackendSuite<C, K> {
    /// `POST /contact`: the stored submission echoes name and email.
    pub async fn contact_form_submission(&mut self) -> bool {
        let procedure = Procedure::ContactFormSubmission;
        let contact = ContactSubmission::inquiry();
        let sent = self.send_json(HttpMethod::Post, "/contact", &contact).await;
        let Some(data) = self.expect_envelope(procedure, sent, Some("submission")) else {
            return false;
        };

        let submission = &data["submission"];
        let echoed = submission.get("name").and_then(Value::as_str) == Some(contact.name.as_str())
            && submission.get("email").and_then(Value::as_str) == Some(contact.email.as_str());
        if echoed {
            self.pass(procedure, "Contact form submitted successfully")
        } else {
            self.fail_with(procedure, "Submission data mismatch", data.to_string())
        }
    }
}
