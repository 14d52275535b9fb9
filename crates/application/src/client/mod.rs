//! Bare and authenticated API clients.
//!
//! Both handles share one [`ClientConfig`]; only [`ApiClient`] attaches
//! credentials and recovers from expired tokens.

mod api_client;
mod bare;
mod config;

pub use api_client::ApiClient;
pub use bare::BareClient;
pub use config::{ClientConfig, DEFAULT_REFRESH_PATH};

use sc_domain::ApiResponse;
use serde::de::DeserializeOwned;

use crate::error::{ApplicationError, ApplicationResult};

/// Decodes a success response, reporting mismatches as invalid responses.
pub(crate) fn decode<R: DeserializeOwned>(response: &ApiResponse) -> ApplicationResult<R> {
    response
        .json()
        .map_err(|e| ApplicationError::InvalidResponse(e.to_string()))
}
