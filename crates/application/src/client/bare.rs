//! Client without the authentication pipeline.

use std::sync::Arc;

use sc_domain::{ApiRequest, ApiResponse, DomainResult, RefreshRequest, RefreshedTokens};
use tracing::debug;

use super::{ClientConfig, decode};
use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::{HttpTransport, OutboundRequest};

/// Sends requests exactly as given: no credentials attached, no recovery.
///
/// Used directly for the token refresh call, so that a failing refresh can
/// never trigger another refresh.
#[derive(Debug)]
pub struct BareClient<T> {
    transport: Arc<T>,
    config: Arc<ClientConfig>,
}

impl<T> Clone for BareClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            config: Arc::clone(&self.config),
        }
    }
}

impl<T: HttpTransport> BareClient<T> {
    /// Creates a bare client over `transport`.
    #[must_use]
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self {
            transport: Arc::new(transport),
            config: Arc::new(config),
        }
    }

    /// Returns the shared configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends a request; non-2xx responses become [`ApplicationError::Status`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, no response arrives,
    /// or the response status is not a success.
    pub async fn execute(&self, request: &ApiRequest) -> ApplicationResult<ApiResponse> {
        let outbound = self.prepare(request)?;
        let response = self.transport.send(outbound).await?;

        if response.status.is_success() {
            Ok(response)
        } else {
            debug!(status = %response.status, path = %request.path, "request failed");
            Err(ApplicationError::Status {
                status: response.status,
                body: response.text(),
            })
        }
    }

    /// Exchanges a refresh token for a new access token.
    ///
    /// # Errors
    ///
    /// Returns the failure of the refresh call unchanged, or
    /// [`ApplicationError::InvalidResponse`] if the answer has no access token.
    pub async fn refresh_tokens(&self, refresh_token: &str) -> ApplicationResult<RefreshedTokens> {
        let request = ApiRequest::post(self.config.refresh_path()).with_json(&RefreshRequest {
            refresh: refresh_token,
        })?;
        let response = self.execute(&request).await?;
        decode(&response)
    }

    fn prepare(&self, request: &ApiRequest) -> DomainResult<OutboundRequest> {
        let url = self.config.endpoint(&request.path, &request.query)?;

        let mut headers = request.headers.clone();
        for header in self.config.default_headers().iter() {
            headers.set_default(&header.name, &header.value);
        }

        Ok(OutboundRequest {
            method: request.method,
            url,
            headers,
            body: request.body.clone(),
        })
    }
}
