//! Session storage that lives only as long as the process.

use std::sync::Arc;

use sc_application::ports::{SessionStorage, StorageError};
use sc_domain::Session;
use tokio::sync::RwLock;

/// Keeps the session in memory; clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStorage {
    slot: Arc<RwLock<Option<Session>>>,
}

impl InMemorySessionStorage {
    /// Creates an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage already holding `session`.
    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(session))),
        }
    }
}

impl SessionStorage for InMemorySessionStorage {
    async fn load(&self) -> Result<Option<Session>, StorageError> {
        Ok(self.slot.read().await.clone())
    }

    async fn save(&self, session: &Session) -> Result<(), StorageError> {
        *self.slot.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.slot.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn clones_share_the_slot() {
        let storage = InMemorySessionStorage::new();
        let other = storage.clone();

        storage.save(&Session::new("a1", None)).await.unwrap();
        assert_eq!(other.load().await.unwrap(), Some(Session::new("a1", None)));

        other.clear().await.unwrap();
        assert_eq!(storage.load().await.unwrap(), None);
    }
}
