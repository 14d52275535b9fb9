//! Base configuration shared by the bare and authenticated clients.

use sc_domain::{DomainError, DomainResult, Headers, media_url};
use url::Url;

/// Default path of the token refresh endpoint.
pub const DEFAULT_REFRESH_PATH: &str = "/api/auth/token/refresh/";

/// Path fragments of the endpoints whose 401s are never recovered.
const DEFAULT_AUTH_ROUTES: [&str; 2] = ["/auth/login/", "/auth/token/refresh/"];

/// Where the API lives and how requests against it are shaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    refresh_path: String,
    auth_routes: Vec<String>,
    default_headers: Headers,
}

impl ClientConfig {
    /// Creates a configuration for the API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str) -> DomainResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| DomainError::InvalidUrl(format!("{e}: {base_url}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(DomainError::InvalidUrl(format!(
                "unsupported scheme {}: {base_url}",
                base_url.scheme()
            )));
        }

        let mut default_headers = Headers::new();
        default_headers.set("Accept", "application/json");

        Ok(Self {
            base_url,
            refresh_path: DEFAULT_REFRESH_PATH.to_string(),
            auth_routes: DEFAULT_AUTH_ROUTES.iter().map(ToString::to_string).collect(),
            default_headers,
        })
    }

    /// Overrides the refresh endpoint path.
    #[must_use]
    pub fn with_refresh_path(mut self, path: impl Into<String>) -> Self {
        self.refresh_path = path.into();
        self
    }

    /// Adds a path fragment whose 401s are propagated without a refresh.
    #[must_use]
    pub fn with_auth_route(mut self, fragment: impl Into<String>) -> Self {
        self.auth_routes.push(fragment.into());
        self
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the refresh endpoint path.
    #[must_use]
    pub fn refresh_path(&self) -> &str {
        &self.refresh_path
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &Headers {
        &self.default_headers
    }

    /// Returns true if `path` targets the login or refresh endpoint.
    #[must_use]
    pub fn is_auth_route(&self, path: &str) -> bool {
        path.contains(self.refresh_path.as_str())
            || self.auth_routes.iter().any(|route| path.contains(route.as_str()))
    }

    /// Resolves a request path (and query) against the base URL.
    ///
    /// Absolute `http(s)` paths (pagination links) are used as given, but only
    /// on the base URL's origin, so credentials never leave the API host.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the result does not parse or an
    /// absolute path points at another origin.
    pub fn endpoint(&self, path: &str, query: &[(String, String)]) -> DomainResult<Url> {
        let absolute = path.starts_with("http://") || path.starts_with("https://");
        let raw = if absolute {
            path.to_string()
        } else {
            let base = self.base_url.as_str().trim_end_matches('/');
            if path.starts_with('/') {
                format!("{base}{path}")
            } else {
                format!("{base}/{path}")
            }
        };

        let mut url = Url::parse(&raw).map_err(|e| DomainError::InvalidUrl(format!("{e}: {raw}")))?;
        if absolute && url.origin() != self.base_url.origin() {
            return Err(DomainError::InvalidUrl(format!(
                "{url} is outside {}",
                self.base_url
            )));
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Resolves a media path returned by the API.
    #[must_use]
    pub fn media_url(&self, path: Option<&str>) -> Option<String> {
        media_url(self.base_url.as_str(), path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rejects_relative_and_non_http_bases() {
        assert!(ClientConfig::new("/api").is_err());
        assert!(ClientConfig::new("ftp://example.com").is_err());
    }

    #[test]
    fn joins_paths_below_base_path() {
        let config = ClientConfig::new("https://api.example.com/v1/").unwrap();
        assert_eq!(
            config.endpoint("/api/ads/", &[]).unwrap().as_str(),
            "https://api.example.com/v1/api/ads/"
        );
    }

    #[test]
    fn appends_query_pairs() {
        let config = ClientConfig::new("http://localhost:8000").unwrap();
        let url = config
            .endpoint(
                "/api/pros/recherche/",
                &[
                    ("search".to_string(), "plombier dakar".to_string()),
                    ("page".to_string(), "2".to_string()),
                ],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/pros/recherche/?search=plombier+dakar&page=2"
        );
    }

    #[test]
    fn absolute_paths_bypass_base() {
        let config = ClientConfig::new("http://localhost:8000").unwrap();
        let next_page = "http://localhost:8000/api/pros/favoris/?page=3";
        assert_eq!(config.endpoint(next_page, &[]).unwrap().as_str(), next_page);
    }

    #[test]
    fn absolute_paths_on_other_origins_are_rejected() {
        let config = ClientConfig::new("http://localhost:8000").unwrap();
        for foreign in [
            "https://evil.example.com/api/pros/favoris/?page=2",
            "https://localhost:8000/api/ads/",
            "http://localhost:9000/api/ads/",
        ] {
            assert!(
                matches!(config.endpoint(foreign, &[]), Err(DomainError::InvalidUrl(_))),
                "{foreign} should be rejected"
            );
        }
    }

    #[test]
    fn custom_refresh_path_is_an_auth_route() {
        let config = ClientConfig::new("http://localhost:8000")
            .unwrap()
            .with_refresh_path("/api/v2/jwt/refresh/");
        assert_eq!(config.refresh_path(), "/api/v2/jwt/refresh/");
        assert!(config.is_auth_route("/api/v2/jwt/refresh/"));
        assert!(!config.is_auth_route("/api/v2/jwt/verify/"));
    }

    #[test]
    fn recognises_auth_routes() {
        let config = ClientConfig::new("http://localhost:8000")
            .unwrap()
            .with_auth_route("/auth/verify-whatsapp/");
        assert!(config.is_auth_route("/api/auth/login/"));
        assert!(config.is_auth_route("/api/auth/token/refresh/"));
        assert!(config.is_auth_route("/api/auth/verify-whatsapp/"));
        assert!(!config.is_auth_route("/api/auth/me/"));
    }
}
