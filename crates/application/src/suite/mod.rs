//! Backend test suite
//!
//! Runs a fixed, ordered sequence of procedures against the club API.
//! Each procedure performs one or more HTTP calls, checks the status code
//! and JSON shape of the replies, records exactly one `TestResult` and
//! returns whether it passed. Failures never escape a procedure.
//!
//! Later procedures depend on the id of the event created by
//! [`BackendSuite::create_event`]; when it is missing they record a failure
//! instead of calling the API.

mod contact;
mod envelope;
mod events;
mod negative;
mod participants;


use std::time::Instant;

use clubcheck_domain::request::DEFAULT_TIMEOUT_MS;
use clubcheck_domain::{ApiBase, HttpMethod, RequestBody, RequestSpec, ResponseSpec, TestResult, TestResults};
use serde::Serialize;
use serde_json::Value;

use crate::error::ApplicationResult;
use crate::ports::{Clock, HttpClient, NullReporter, Reporter};

pub use events::EVENTS_LIMIT;
pub use negative::{UNKNOWN_EVENT_ID, UNKNOWN_PARTICIPANT_EVENT_ID};

use envelope::Rejection;

/// Heading printed before the first procedure.
pub const RUN_TITLE: &str = "IEEE CLUB HACKATHON WEBSITE - BACKEND API TESTING";

/// Text the health check expects in the API's `message` field.
pub const DEFAULT_BANNER: &str = "IEEE Club API";

/// Details recorded by procedures that need the created event.
pub const MISSING_EVENT_ID: &str = "No event ID available (create event test failed)";

/// Settings for a suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Base URL of the API, including its `/api` prefix.
    pub base: ApiBase,
    /// Per-call timeout in milliseconds.
    pub timeout_ms: u64,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub bearer_token: Option<String>,
    /// Expected substring of the health check's `message`.
    pub health_banner: String,
}

impl SuiteConfig {
    /// Creates a configuration with the default timeout and banner.
    #[must_use]
    pub fn new(base: ApiBase) -> Self {
        Self {
            base,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            bearer_token: None,
            health_banner: DEFAULT_BANNER.to_string(),
        }
    }

    /// Set the per-call timeout.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the bearer token.
    #[must_use]
    pub fn with_bearer_token(mut self, token: Option<String>) -> Self {
        self.bearer_token = token;
        self
    }

    /// Set the expected health banner.
    #[must_use]
    pub fn with_health_banner(mut self, banner: impl Into<String>) -> Self {
        self.health_banner = banner.into();
        self
    }
}

/// The procedures of a run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Procedure {
    /// `GET /`
    HealthCheck,
    /// `POST /events`
    CreateEvent,
    /// `GET /events`
    GetAllEvents,
    /// `GET /events?active=true`
    GetActiveEvents,
    /// `GET /events?limit=5`
    GetEventsWithLimit,
    /// `GET /events/{id}`
    GetSingleEvent,
    /// `PUT /events/{id}`
    UpdateEvent,
    /// `POST /participants`
    CreateParticipant,
    /// `GET /participants/{eventId}`
    GetParticipantsForEvent,
    /// `GET /participants/count`
    GetParticipantCount,
    /// `POST /contact`
    ContactFormSubmission,
    /// Three negative-path checks.
    ErrorHandling,
    /// `DELETE /events/{id}`
    DeleteEvent,
}

impl Procedure {
    /// Every procedure, in the order a run executes them.
    pub const ALL: [Self; 13] = [
        Self::HealthCheck,
        Self::CreateEvent,
        Self::GetAllEvents,
        Self::GetActiveEvents,
        Self::GetEventsWithLimit,
        Self::GetSingleEvent,
        Self::UpdateEvent,
        Self::CreateParticipant,
        Self::GetParticipantsForEvent,
        Self::GetParticipantCount,
        Self::ContactFormSubmission,
        Self::ErrorHandling,
        Self::DeleteEvent,
    ];

    /// Name recorded in the procedure's `TestResult`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HealthCheck => "API Health Check",
            Self::CreateEvent => "Create Event",
            Self::GetAllEvents => "Get All Events",
            Self::GetActiveEvents => "Get Active Events",
            Self::GetEventsWithLimit => "Get Events with Limit",
            Self::GetSingleEvent => "Get Single Event",
            Self::UpdateEvent => "Update Event",
            Self::CreateParticipant => "Create Participant",
            Self::GetParticipantsForEvent => "Get Participants for Event",
            Self::GetParticipantCount => "Get Participant Count",
            Self::ContactFormSubmission => "Contact Form Submission",
            Self::ErrorHandling => "Error Handling Tests",
            Self::DeleteEvent => "Delete Event",
        }
    }
}

/// Runs the procedures against one backend, holding the shared fixture id.
pub struct BackendSuite<C, K> {
    client: C,
    clock: K,
    config: SuiteConfig,
    reporter: Box<dyn Reporter>,
    created_event_id: Option<String>,
    results: Vec<TestResult>,
}

impl<C: HttpClient, K: Clock> BackendSuite<C, K> {
    /// Creates a suite that reports nowhere.
    pub fn new(client: C, clock: K, config: SuiteConfig) -> Self {
        Self {
            client,
            clock,
            config,
            reporter: Box::new(NullReporter),
            created_event_id: None,
            results: Vec::new(),
        }
    }

    /// Set the reporter (builder pattern).
    #[must_use]
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Id of the event created by this run, once `create_event` passed.
    pub fn created_event_id(&self) -> Option<&str> {
        self.created_event_id.as_deref()
    }

    /// Results recorded so far, in run order.
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Runs every procedure in order and returns the summary.
    #[allow(clippy::cast_possible_truncation)]
    pub async fn run_all(&mut self) -> TestResults {
        let start = Instant::now();
        self.reporter.run_started(RUN_TITLE);

        let mut passed = 0usize;
        for procedure in Procedure::ALL {
            if self.run(procedure).await {
                passed += 1;
            }
        }

        let results = TestResults::new(self.results.clone(), start.elapsed().as_millis() as u64);
        tracing::info!(
            passed,
            total = Procedure::ALL.len(),
            duration_ms = results.duration_ms,
            "suite finished"
        );
        self.reporter.run_finished(&results);
        results
    }

    /// Runs a single procedure.
    pub async fn run(&mut self, procedure: Procedure) -> bool {
        match procedure {
            Procedure::HealthCheck => self.health_check().await,
            Procedure::CreateEvent => self.create_event().await,
            Procedure::GetAllEvents => self.get_all_events().await,
            Procedure::GetActiveEvents => self.get_active_events().await,
            Procedure::GetEventsWithLimit => self.get_events_with_limit().await,
            Procedure::GetSingleEvent => self.get_single_event().await,
            Procedure::UpdateEvent => self.update_event().await,
            Procedure::CreateParticipant => self.create_participant().await,
            Procedure::GetParticipantsForEvent => self.get_participants_for_event().await,
            Procedure::GetParticipantCount => self.get_participant_count().await,
            Procedure::ContactFormSubmission => self.contact_form_submission().await,
            Procedure::ErrorHandling => self.error_handling().await,
            Procedure::DeleteEvent => self.delete_event().await,
        }
    }

    fn request(&self, method: HttpMethod, path: &str) -> RequestSpec {
        let mut request = RequestSpec::new(method, self.config.base.endpoint(path))
            .with_header("Content-Type", "application/json")
            .with_header("Accept", "application/json")
            .with_timeout_ms(self.config.timeout_ms);
        if let Some(token) = &self.config.bearer_token {
            request = request.with_header("Authorization", format!("Bearer {token}"));
        }
        request
    }

    async fn send(&self, method: HttpMethod, path: &str) -> ApplicationResult<ResponseSpec> {
        self.dispatch(self.request(method, path)).await
    }

    async fn send_json<T>(&self, method: HttpMethod, path: &str, body: &T) -> ApplicationResult<ResponseSpec>
    where
        T: Serialize + Sync + ?Sized,
    {
        let body = RequestBody::json(body)?;
        self.dispatch(self.request(method, path).with_body(body)).await
    }

    #[allow(clippy::cast_possible_truncation)]
    async fn dispatch(&self, request: RequestSpec) -> ApplicationResult<ResponseSpec> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.client.execute(&request).await?;
        tracing::debug!(
            status = response.status,
            duration_ms = response.duration.as_millis() as u64,
            "received response"
        );
        Ok(response)
    }

    fn record(&mut self, result: TestResult) -> bool {
        let success = result.success;
        if success {
            tracing::info!(test = %result.test, "passed");
        } else {
            tracing::warn!(test = %result.test, details = %result.details, "failed");
        }
        self.reporter.result_recorded(&result);
        self.results.push(result);
        success
    }

    fn pass(&mut self, procedure: Procedure, details: impl Into<String>) -> bool {
        self.record(TestResult::pass(procedure.name(), details))
    }

    fn fail(&mut self, procedure: Procedure, details: impl Into<String>) -> bool {
        self.record(TestResult::fail(procedure.name(), details))
    }

    fn fail_with(
        &mut self,
        procedure: Procedure,
        details: impl Into<String>,
        response: impl Into<String>,
    ) -> bool {
        self.record(TestResult::fail(procedure.name(), details).with_response(response))
    }

    /// Returns the fixture id, or records the procedure as failed.
    fn fixture_event_id(&mut self, procedure: Procedure) -> Option<String> {
        let id = self.created_event_id.clone();
        if id.is_none() {
            self.fail(procedure, MISSING_EVENT_ID);
        }
        id
    }

    /// Checks for a 200 reply carrying `{"success": true, "<key>": ...}`.
    ///
    /// On any mismatch the failure is recorded and `None` returned.
    fn expect_envelope(
        &mut self,
        procedure: Procedure,
        sent: ApplicationResult<ResponseSpec>,
        key: Option<&str>,
    ) -> Option<Value> {
        let response = match sent {
            Ok(response) => response,
            Err(e) => {
                self.fail(procedure, format!("Error: {e}"));
                return None;
            }
        };

        match envelope::open(&response, key) {
            Ok(data) => Some(data),
            Err(Rejection::Status { status, body }) => {
                self.fail_with(procedure, format!("Status: {status}"), body);
                None
            }
            Err(Rejection::NotJson { error, body }) => {
                self.fail_with(procedure, format!("Invalid JSON response: {error}"), body);
                None
            }
            Err(Rejection::Envelope { details, data }) => {
                self.fail_with(procedure, details, data.to_string());
                None
            }
        }
    }
}
