//! In-memory session with write-through persistence.
//!
//! The store is the single source of truth for the tokens the client
//! attaches. Every mutation is mirrored to the [`SessionStorage`] port;
//! persistence failures are logged and never undo the in-memory change.

use std::sync::Arc;

use sc_domain::Session;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::ports::SessionStorage;

/// Shared handle on the current session.
#[derive(Debug)]
pub struct SessionStore<S> {
    session: Arc<RwLock<Session>>,
    storage: Arc<S>,
}

impl<S> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<S: SessionStorage> SessionStore<S> {
    /// Creates an empty store over `storage`.
    ///
    /// Call [`initialize_session`](Self::initialize_session) once at startup
    /// to pick up a previously persisted session.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::default())),
            storage: Arc::new(storage),
        }
    }

    /// Rehydrates the session from storage and returns it.
    ///
    /// An unreadable or corrupt entry is logged and the process starts
    /// signed out.
    pub async fn initialize_session(&self) -> Session {
        let restored = match self.storage.load().await {
            Ok(Some(session)) => session,
            Ok(None) => Session::default(),
            Err(e) => {
                warn!(error = %e, "could not restore session, starting signed out");
                Session::default()
            }
        };

        if restored.is_authenticated() {
            info!("restored persisted session");
        } else {
            debug!("no persisted session");
        }

        let mut session = self.session.write().await;
        *session = restored.clone();
        restored
    }

    /// Returns a copy of the current session.
    pub async fn snapshot(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Returns the current access token.
    pub async fn access_token(&self) -> Option<String> {
        self.session.read().await.access_token.clone()
    }

    /// Returns the current refresh token.
    pub async fn refresh_token(&self) -> Option<String> {
        self.session.read().await.refresh_token.clone()
    }

    /// Returns true if an access token is held.
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    /// Replaces both tokens.
    pub async fn set_tokens(&self, access_token: String, refresh_token: Option<String>) {
        let snapshot = {
            let mut session = self.session.write().await;
            *session = Session::new(access_token, refresh_token);
            session.clone()
        };

        if let Err(e) = self.storage.save(&snapshot).await {
            warn!(error = %e, "failed to persist session");
        }
    }

    /// Signs out: drops both tokens and the persisted entry.
    pub async fn clear(&self) {
        {
            let mut session = self.session.write().await;
            *session = Session::default();
        }

        if let Err(e) = self.storage.clear().await {
            warn!(error = %e, "failed to remove persisted session");
        }
    }
}
