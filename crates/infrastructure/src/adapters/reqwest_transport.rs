//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port. It returns every
//! response it receives, whatever the status; the clients decide what a
//! failure status means.

use reqwest::{Client, Method};
use sc_application::ports::{HttpTransport, OutboundRequest, TransportError};
use sc_domain::{ApiResponse, Headers, HttpMethod};
use tracing::trace;

/// Maximum number of redirects followed per request.
pub const MAX_REDIRECTS: usize = 10;

/// HTTP transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport sending `user_agent`.
    ///
    /// Redirects are followed up to [`MAX_REDIRECTS`]; TLS verification is
    /// enabled. No request timeout is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(user_agent: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a transport over a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    fn map_error(error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout;
        }

        if error.is_connect() {
            let message = error.to_string();
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return TransportError::Dns {
                    host: error
                        .url()
                        .and_then(|u| u.host_str())
                        .unwrap_or("unknown")
                        .to_string(),
                    message,
                };
            }
            return TransportError::Connection(message);
        }

        if error.is_builder() {
            return TransportError::InvalidRequest(error.to_string());
        }

        if error.is_redirect() {
            return TransportError::Other(format!("more than {MAX_REDIRECTS} redirects"));
        }

        TransportError::Other(error.to_string())
    }

    fn to_headers(headers: &reqwest::header::HeaderMap) -> Headers {
        let mut converted = Headers::new();
        for (name, value) in headers {
            if let Ok(value) = value.to_str() {
                converted.set(name.as_str(), value);
            }
        }
        converted
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: OutboundRequest) -> Result<ApiResponse, TransportError> {
        let OutboundRequest {
            method,
            url,
            headers,
            body,
        } = request;

        trace!(%method, %url, "sending request");
        let mut builder = self.client.request(Self::to_reqwest_method(method), url);

        for header in headers.iter() {
            builder = builder.header(&header.name, &header.value);
        }

        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| Self::map_error(&e))?;

        let status = response.status().as_u16();
        let headers = Self::to_headers(response.headers());
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Other(format!("failed to read body: {e}")))?
            .to_vec();

        Ok(ApiResponse::new(status, headers, body))
    }
}
