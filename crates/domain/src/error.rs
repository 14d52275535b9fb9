//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building requests or decoding payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP method is not supported.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// Query parameters could not be encoded.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The request body could not be encoded.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// A payload could not be decoded into the expected type.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
