//! Decides whether a failed request is recovered with a token refresh.

use sc_domain::ApiRequest;

use crate::client::ClientConfig;
use crate::error::ApplicationError;

/// Why a failure is handed back to the caller untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropagateReason {
    /// No response was received.
    NoResponse,
    /// The API answered with something other than 401.
    NotUnauthorized,
    /// The request targets the login or refresh endpoint.
    AuthRoute,
    /// The request is already a replay.
    AlreadyRetried,
}

/// What to do with a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Obtain a fresh access token and replay the request once.
    Refresh,
    /// Return the error to the caller unchanged.
    Propagate(PropagateReason),
}

/// Classifies a failed request.
#[must_use]
pub fn recovery_for(
    config: &ClientConfig,
    request: &ApiRequest,
    error: &ApplicationError,
) -> Recovery {
    let status = match error {
        ApplicationError::Status { status, .. } => *status,
        ApplicationError::Network(_) => return Recovery::Propagate(PropagateReason::NoResponse),
        _ => return Recovery::Propagate(PropagateReason::NotUnauthorized),
    };

    if !status.is_unauthorized() {
        Recovery::Propagate(PropagateReason::NotUnauthorized)
    } else if config.is_auth_route(&request.path) {
        Recovery::Propagate(PropagateReason::AuthRoute)
    } else if request.is_retried() {
        Recovery::Propagate(PropagateReason::AlreadyRetried)
    } else {
        Recovery::Refresh
    }
}
