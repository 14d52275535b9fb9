//! HTTP transport port

use std::future::Future;

use sc_domain::{ApiResponse, Headers, HttpMethod};
use thiserror::Error;
use url::Url;

/// A fully resolved request, ready to be put on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute URL, query included.
    pub url: Url,
    /// Headers to send.
    pub headers: Headers,
    /// Body to send.
    pub body: Option<Vec<u8>>,
}

/// Failures where no HTTP response was received.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The host name could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    Dns {
        /// Host that failed to resolve.
        host: String,
        /// Underlying error message.
        message: String,
    },

    /// The server did not answer in time.
    #[error("request timed out")]
    Timeout,

    /// The request could not be built by the transport.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for putting requests on the wire.
///
/// Implementations return every response they receive, whatever its status;
/// only failures where no response arrived are errors.
pub trait HttpTransport: Send + Sync {
    /// Sends a request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns an error if no response was received.
    fn send(
        &self,
        request: OutboundRequest,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> + Send;
}
