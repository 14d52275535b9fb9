//! Wiring of the concrete client.

use sc_application::ports::SessionStorage;
use sc_application::{ApiClient, BareClient, ClientConfig, RefreshCoordinator, SessionStore};

use crate::adapters::ReqwestTransport;
use crate::config::{ClientSettings, ConfigError};
use crate::persistence::FileSessionStorage;

/// The client used by the binary: reqwest on the wire, session on disk.
pub type MarketplaceClient = ApiClient<ReqwestTransport, FileSessionStorage>;

/// Builds a client persisting its session to `settings.session_file`.
///
/// The session is not loaded yet; call `initialize_session` before the first
/// request.
///
/// # Errors
///
/// Returns an error if the base URL is invalid or the transport cannot be
/// created.
pub fn build_client(settings: &ClientSettings) -> Result<MarketplaceClient, ConfigError> {
    build_client_with(
        settings,
        FileSessionStorage::new(settings.session_file.clone()),
    )
}

/// Builds a client over a caller-supplied session storage.
///
/// # Errors
///
/// Same as [`build_client`].
pub fn build_client_with<S: SessionStorage>(
    settings: &ClientSettings,
    storage: S,
) -> Result<ApiClient<ReqwestTransport, S>, ConfigError> {
    let config = ClientConfig::new(&settings.base_url)
        .map_err(|e| ConfigError::InvalidBaseUrl(e.to_string()))?;
    let transport = ReqwestTransport::new(&settings.user_agent)
        .map_err(|e| ConfigError::Transport(e.to_string()))?;

    Ok(ApiClient::new(
        BareClient::new(transport, config),
        SessionStore::new(storage),
        RefreshCoordinator::new(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::InMemorySessionStorage;
    use std::path::PathBuf;

    fn settings(base_url: &str) -> ClientSettings {
        ClientSettings {
            base_url: base_url.into(),
            session_file: PathBuf::from("/tmp/sc-test-session.json"),
            user_agent: "sc-test".into(),
        }
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(matches!(
            build_client(&settings("not a url")),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn builds_over_any_storage() {
        let client = build_client_with(
            &settings("http://localhost:8000"),
            InMemorySessionStorage::new(),
        );
        assert!(client.is_ok());
    }
}
