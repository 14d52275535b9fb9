//! Authentication session and token exchange types.

use serde::{Deserialize, Serialize};

/// Storage key under which the session is persisted.
pub const SESSION_STORAGE_KEY: &str = "sc_auth_storage";

/// The credentials of the signed-in professional.
///
/// Serialized with the camelCase field names used by the persisted entry:
/// `{ "accessToken": ..., "refreshToken": ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Short-lived bearer credential.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Longer-lived credential used to mint new access tokens.
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl Session {
    /// Creates a session from a freshly issued token pair.
    #[must_use]
    pub fn new(access_token: impl Into<String>, refresh_token: Option<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            refresh_token,
        }
    }

    /// Returns true if an access token is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Returns true if both tokens are absent.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none()
    }
}

/// Body of `POST /api/auth/token/refresh/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshRequest<'a> {
    /// The stored refresh token.
    pub refresh: &'a str,
}

/// Response of the token refresh endpoint.
///
/// Some backends rotate the refresh token and return a new one; others only
/// return a new access token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefreshedTokens {
    /// The new access token.
    pub access: String,
    /// A rotated refresh token, when the backend issues one.
    #[serde(default)]
    pub refresh: Option<String>,
}
