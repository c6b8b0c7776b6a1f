//! Clubcheck Domain - Core types
//!
//! This crate defines the domain model for the clubcheck smoke-test runner:
//! request and response specs, the API base URL, payloads sent to the
//! backend, and the results recorded for each test procedure.
//! All types here are pure Rust with no I/O dependencies.

pub mod endpoint;
pub mod error;
pub mod payload;
pub mod request;
pub mod response;
pub mod testing;

pub use endpoint::ApiBase;
pub use error::{DomainError, DomainResult};
pub use payload::{ContactSubmission, EventDraft, EventUpdate, FormField, ParticipantDraft};
pub use request::{HttpMethod, RequestBody, RequestSpec};
pub use response::ResponseSpec;
pub use testing::{StatusExpectation, TestResult, TestResults};
