//! Transport-neutral API request

use serde::Serialize;

use super::header::{AUTHORIZATION, CONTENT_TYPE, Headers};
use super::method::HttpMethod;
use crate::error::{DomainError, DomainResult};

const JSON_CONTENT_TYPE: &str = "application/json";

/// A request against the marketplace API, relative to the configured base URL.
///
/// The `retried` marker travels with the request so the client can tell a
/// replay apart from a first attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Path below the base URL (e.g. `/api/pros/favoris/`).
    pub path: String,
    /// Query parameters in insertion order.
    pub query: Vec<(String, String)>,
    /// Request headers.
    pub headers: Headers,
    /// Encoded request body.
    pub body: Option<Vec<u8>>,
    retried: bool,
}

impl ApiRequest {
    /// Creates a request with the given method and path.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Headers::new(),
            body: None,
            retried: false,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a POST request.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    /// Creates a PATCH request.
    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    /// Creates a DELETE request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Appends every field of `params` as query parameters.
    ///
    /// `None` fields must be skipped by the serializer (`skip_serializing_if`),
    /// otherwise they are sent as empty values.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidQuery`] if `params` is not a flat struct or map.
    pub fn with_query<T: Serialize + ?Sized>(mut self, params: &T) -> DomainResult<Self> {
        let encoded = serde_urlencoded::to_string(params)
            .map_err(|e| DomainError::InvalidQuery(e.to_string()))?;
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(&encoded)
            .map_err(|e| DomainError::InvalidQuery(e.to_string()))?;
        self.query.extend(pairs);
        Ok(self)
    }

    /// Sets a JSON body and the matching content type.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBody`] if `body` cannot be serialized.
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> DomainResult<Self> {
        let bytes = serde_json::to_vec(body).map_err(|e| DomainError::InvalidBody(e.to_string()))?;
        self.headers.set(CONTENT_TYPE, JSON_CONTENT_TYPE);
        self.body = Some(bytes);
        Ok(self)
    }

    /// Attaches `token` as the bearer credential.
    pub fn set_bearer(&mut self, token: &str) {
        self.headers.set(AUTHORIZATION, format!("Bearer {token}"));
    }

    /// Returns the bearer token currently attached, if any.
    #[must_use]
    pub fn bearer(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)
            .and_then(|value| value.strip_prefix("Bearer "))
    }

    /// Returns true if this request is already a replay.
    #[must_use]
    pub const fn is_retried(&self) -> bool {
        self.retried
    }

    /// Marks this request as a replay.
    pub const fn mark_retried(&mut self) {
        self.retried = true;
    }
}
