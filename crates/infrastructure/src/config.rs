//! Client settings read from the environment.
//!
//! | Variable          | Default                              |
//! |-------------------|--------------------------------------|
//! | `SC_API_BASE_URL` | `http://localhost:8000`              |
//! | `SC_SESSION_FILE` | `<data dir>/sc/sc_auth_storage.json` |
//! | `SC_USER_AGENT`   | `sc-client/<version>`                |

use std::path::PathBuf;

use thiserror::Error;

use crate::persistence::FileSessionStorage;

/// Base URL used when `SC_API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable holding the API base URL.
pub const BASE_URL_VAR: &str = "SC_API_BASE_URL";
/// Environment variable holding the session file path.
pub const SESSION_FILE_VAR: &str = "SC_SESSION_FILE";
/// Environment variable holding the user agent.
pub const USER_AGENT_VAR: &str = "SC_USER_AGENT";

/// Errors raised while loading settings or assembling the client.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No session file was configured and the platform has no data directory.
    #[error("could not determine a data directory; set {SESSION_FILE_VAR}")]
    NoDataDir,

    /// The configured base URL is not usable.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The HTTP transport could not be created.
    #[error("HTTP transport error: {0}")]
    Transport(String),
}

/// Everything needed to build a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// API base URL.
    pub base_url: String,
    /// Where the session is persisted.
    pub session_file: PathBuf,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl ClientSettings {
    /// Reads the settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoDataDir`] if no session file is configured
    /// and no default location exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the settings through `lookup`, treating blank values as unset.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let session_file = match var(SESSION_FILE_VAR) {
            Some(path) => PathBuf::from(path),
            None => FileSessionStorage::default_path().ok_or(ConfigError::NoDataDir)?,
        };

        Ok(Self {
            base_url: var(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            session_file,
            user_agent: var(USER_AGENT_VAR).unwrap_or_else(default_user_agent),
        })
    }

    /// Replaces the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replaces the session file.
    #[must_use]
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = path.into();
        self
    }
}

fn default_user_agent() -> String {
    format!("sc-client/{}", env!("CARGO_PKG_VERSION"))
}
