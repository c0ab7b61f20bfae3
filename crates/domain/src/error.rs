//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building requests or reading responses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or cannot be joined onto the base URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A breed name cannot be used to build an endpoint path.
    #[error("invalid breed name: {0:?}")]
    InvalidBreed(String),

    /// The response body could not be decoded into the expected shape.
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
