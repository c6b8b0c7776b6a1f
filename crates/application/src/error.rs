//! Application error types

use clubcheck_domain::DomainError;
use thiserror::Error;

use crate::ports::HttpClientError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// An HTTP request failed.
    #[error("{0}")]
    Http(#[from] HttpClientError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
