//! Clubcheck Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (HTTP client, clock, reporter)
//! - The backend suite: the fixed, ordered sequence of test procedures
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod suite;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{Clock, HttpClient, HttpClientError, NullReporter, Reporter};
pub use suite::{BackendSuite, Procedure, SuiteConfig};
