//! Application error types

use sc_domain::{DomainError, StatusCode};
use thiserror::Error;

use crate::ports::TransportError;

/// Application-level errors.
///
/// `Clone` so that one refresh outcome can be handed to every request queued
/// behind it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApplicationError {
    /// No response was received (connection failure, DNS, TLS...).
    #[error("network error: {0}")]
    Network(#[from] TransportError),

    /// The API answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Response status.
        status: StatusCode,
        /// Response body, lossily decoded.
        body: String,
    },

    /// A token refresh was needed but no refresh token is stored.
    #[error("no refresh token available")]
    MissingRefreshToken,

    /// The refresh this request was queued behind ended without an outcome.
    #[error("token refresh was abandoned")]
    RefreshAborted,

    /// A success response did not carry the expected payload.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// A request could not be built or a payload decoded.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
}

impl ApplicationError {
    /// Returns the HTTP status, if the API answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the API rejected the credential.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status, .. } if status.is_unauthorized())
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
