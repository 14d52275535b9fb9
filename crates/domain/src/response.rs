//! Response type
//!
//! Contains the transport-neutral response returned by the client, with
//! status helpers and JSON decoding.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::request::Headers;

/// HTTP status code with semantic helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// 401 Unauthorized.
    pub const UNAUTHORIZED: Self = Self(401);

    /// Creates a new `StatusCode`.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns true if this is a 2xx success status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Returns true if the credential was rejected.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        self.0 == 401
    }

    /// Returns the canonical reason phrase for common status codes.
    #[must_use]
    pub const fn reason_phrase(&self) -> &'static str {
        match self.0 {
            200 => "OK",
            201 => "Created",
            204 => "No Content",
            400 => "Bad Request",
            401 => "Unauthorized",
            403 => "Forbidden",
            404 => "Not Found",
            405 => "Method Not Allowed",
            409 => "Conflict",
            429 => "Too Many Requests",
            500 => "Internal Server Error",
            502 => "Bad Gateway",
            503 => "Service Unavailable",
            504 => "Gateway Timeout",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.reason_phrase())
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// A response received from the API.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiResponse {
    /// Response status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: Headers,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Creates a response.
    #[must_use]
    pub fn new(status: impl Into<StatusCode>, headers: Headers, body: Vec<u8>) -> Self {
        Self {
            status: status.into(),
            headers,
            body,
        }
    }

    /// Creates a response carrying a JSON body.
    #[must_use]
    pub fn json_body(status: impl Into<StatusCode>, body: &serde_json::Value) -> Self {
        let mut headers = Headers::new();
        headers.set(crate::request::CONTENT_TYPE, "application/json");
        Self::new(status, headers, body.to_string().into_bytes())
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decodes the body as JSON.
    ///
    /// An empty body decodes as JSON `null`, so `()` and `Option<T>` targets
    /// accept `204 No Content`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPayload`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> DomainResult<T> {
        let body: &[u8] = if self.body.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &self.body
        };
        serde_json::from_slice(body).map_err(|e| DomainError::InvalidPayload(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn status_helpers() {
        assert!(StatusCode(204).is_success());
        assert!(StatusCode::UNAUTHORIZED.is_unauthorized());
        assert!(!StatusCode(403).is_unauthorized());
        assert_eq!(StatusCode(401).to_string(), "401 Unauthorized");
    }

    #[test]
    fn decodes_json_body() {
        let response = ApiResponse::json_body(200, &json!({ "access": "t2" }));
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["access"], "t2");
    }

    #[test]
    fn empty_body_decodes_as_unit() {
        let response = ApiResponse::new(204, Headers::new(), Vec::new());
        response.json::<()>().unwrap();
        assert_eq!(response.json::<Option<u32>>().unwrap(), None);
    }

    #[test]
    fn mismatched_body_is_invalid_payload() {
        let response = ApiResponse::json_body(200, &json!([1, 2]));
        assert!(matches!(
            response.json::<String>(),
            Err(DomainError::InvalidPayload(_))
        ));
    }
}
