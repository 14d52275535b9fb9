//! Client with the authentication pipeline attached.
//!
//! Every request carries the current access token. A first 401 on a
//! non-auth route triggers one coordinated refresh; requests that hit a 401
//! while that refresh is running wait for it instead of starting their own.
//! Each request is replayed at most once.

use sc_domain::{ApiRequest, ApiResponse, Session};
use serde::de::DeserializeOwned;
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use super::{BareClient, ClientConfig, decode};
use crate::auth::{Recovery, RefreshCoordinator, RefreshOutcome, RefreshTicket, recovery_for};
use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::{HttpTransport, SessionStorage};
use crate::session::SessionStore;

/// Authenticated API client.
///
/// Cheap to clone; clones share the transport, the session and the refresh
/// coordinator.
#[derive(Debug)]
pub struct ApiClient<T, S> {
    bare: BareClient<T>,
    session: SessionStore<S>,
    refresh: RefreshCoordinator,
}

impl<T, S> Clone for ApiClient<T, S> {
    fn clone(&self) -> Self {
        Self {
            bare: self.bare.clone(),
            session: self.session.clone(),
            refresh: self.refresh.clone(),
        }
    }
}

impl<T: HttpTransport, S: SessionStorage> ApiClient<T, S> {
    /// Assembles a client from its parts.
    ///
    /// The coordinator is injected so that every client built over the same
    /// session shares one refresh flag.
    #[must_use]
    pub const fn new(
        bare: BareClient<T>,
        session: SessionStore<S>,
        refresh: RefreshCoordinator,
    ) -> Self {
        Self {
            bare,
            session,
            refresh,
        }
    }

    /// Returns the bare client sharing this client's configuration.
    #[must_use]
    pub const fn bare(&self) -> &BareClient<T> {
        &self.bare
    }

    /// Returns the session store.
    #[must_use]
    pub const fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Returns the refresh coordinator.
    #[must_use]
    pub const fn coordinator(&self) -> &RefreshCoordinator {
        &self.refresh
    }

    /// Returns the shared configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        self.bare.config()
    }

    /// Restores the persisted session. Call once at process start.
    pub async fn initialize_session(&self) -> Session {
        self.session.initialize_session().await
    }

    /// Sends a request with credentials, recovering once from an expired token.
    ///
    /// # Errors
    ///
    /// Returns the original failure when it is not recoverable, or the
    /// refresh failure when recovery was attempted and failed. After a
    /// refresh failure the session is cleared.
    pub async fn execute(&self, request: ApiRequest) -> ApplicationResult<ApiResponse> {
        let span = info_span!(
            "api_request",
            request_id = %Uuid::now_v7(),
            method = %request.method,
            path = %request.path,
        );
        self.execute_with_recovery(request).instrument(span).await
    }

    /// Sends a request and decodes the JSON answer.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute), plus
    /// [`ApplicationError::InvalidResponse`] if the body does not decode.
    pub async fn send_json<R: DeserializeOwned>(&self, request: ApiRequest) -> ApplicationResult<R> {
        let response = self.execute(request).await?;
        decode(&response)
    }

    async fn execute_with_recovery(&self, mut request: ApiRequest) -> ApplicationResult<ApiResponse> {
        self.authorize(&mut request).await;

        let error = match self.bare.execute(&request).await {
            Ok(response) => return Ok(response),
            Err(error) => error,
        };

        match recovery_for(self.config(), &request, &error) {
            Recovery::Propagate(reason) => {
                debug!(?reason, %error, "propagating failure");
                Err(error)
            }
            Recovery::Refresh => {
                let token = self.fresh_access_token().await?;
                request.mark_retried();
                request.set_bearer(&token);
                debug!("replaying with refreshed token");
                self.bare.execute(&request).await
            }
        }
    }

    async fn authorize(&self, request: &mut ApiRequest) {
        if let Some(token) = self.session.access_token().await {
            request.set_bearer(&token);
        }
    }

    /// Leads a refresh or waits for the one in flight.
    async fn fresh_access_token(&self) -> RefreshOutcome {
        let lease = match self.refresh.join() {
            RefreshTicket::Waiter(pending) => return pending.wait().await,
            RefreshTicket::Leader(lease) => lease,
        };

        let outcome = self.refresh_session().await;
        if let Err(error) = &outcome {
            warn!(%error, "token refresh failed, signing out");
            self.session.clear().await;
        }

        let released = lease.settle(&outcome);
        if outcome.is_ok() {
            info!(released, "access token refreshed");
        }
        outcome
    }

    async fn refresh_session(&self) -> RefreshOutcome {
        let refresh_token = self
            .session
            .refresh_token()
            .await
            .ok_or(ApplicationError::MissingRefreshToken)?;

        let tokens = self.bare.refresh_tokens(&refresh_token).await?;
        let access = tokens.access.clone();
        self.session
            .set_tokens(tokens.access, Some(tokens.refresh.unwrap_or(refresh_token)))
            .await;
        Ok(access)
    }
}
