//! File-based session persistence.
//!
//! The session is stored as a small JSON document in the platform data
//! directory:
//! - Linux: ~/.local/share/sc/sc_auth_storage.json
//! - macOS: ~/Library/Application Support/sc/sc_auth_storage.json
//! - Windows: %LOCALAPPDATA%/sc/sc_auth_storage.json

use std::io;
use std::path::{Path, PathBuf};

use sc_application::ports::{SessionStorage, StorageError};
use sc_domain::{SESSION_STORAGE_KEY, Session};
use tokio::fs;
use tracing::debug;

use crate::serialization::{from_json_bytes, to_json_stable_bytes};

/// Stores the session in a JSON file.
///
/// ```json
/// {
///   "accessToken": "eyJhbGciOi...",
///   "refreshToken": "eyJhbGciOi..."
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    /// Creates a storage writing to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default session file path, if a data directory exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join("sc").join(format!("{SESSION_STORAGE_KEY}.json")))
    }

    /// Returns the session file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn io_error(path: &Path, error: &io::Error) -> StorageError {
    StorageError::Io(format!("{}: {error}", path.display()))
}

impl SessionStorage for FileSessionStorage {
    async fn load(&self) -> Result<Option<Session>, StorageError> {
        let content = match fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(&self.path, &e)),
        };

        let session: Session =
            from_json_bytes(&content).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        debug!(path = %self.path.display(), "loaded session file");
        Ok(Some(session))
    }

    async fn save(&self, session: &Session) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(parent, &e))?;
        }

        let content =
            to_json_stable_bytes(session).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| io_error(&self.path, &e))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&self.path, &e)),
        }
    }
}
