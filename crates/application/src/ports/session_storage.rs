//! Session storage port

use std::future::Future;

use sc_domain::Session;
use thiserror::Error;

/// Errors raised by session storage backends.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store could not be read or written.
    #[error("I/O error: {0}")]
    Io(String),

    /// The stored entry is not a valid session.
    #[error("corrupt session entry: {0}")]
    Corrupt(String),
}

/// Port for the durable copy of the session.
pub trait SessionStorage: Send + Sync {
    /// Loads the stored session, `None` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry exists but cannot be read or decoded.
    fn load(&self) -> impl Future<Output = Result<Option<Session>, StorageError>> + Send;

    /// Replaces the stored session.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be written.
    fn save(&self, session: &Session) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Removes the stored session.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry exists but cannot be removed.
    fn clear(&self) -> impl Future<Output = Result<(), StorageError>> + Send;
}
