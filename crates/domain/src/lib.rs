//! SC Domain - Core marketplace types
//!
//! This crate defines the domain model for the SC marketplace API client:
//! the persisted session, transport-neutral requests and responses, and the
//! wire types exchanged with the backend.
//! All types here are pure Rust with no I/O dependencies.

pub mod account;
pub mod ads;
pub mod billing;
pub mod catalog;
pub mod error;
pub mod listing;
pub mod media;
pub mod pagination;
pub mod pro;
pub mod request;
pub mod response;
pub mod session;

pub use error::{DomainError, DomainResult};
pub use media::media_url;
pub use pagination::{ListPayload, Paginated, ensure_paginated, unwrap_list};
pub use request::{ApiRequest, Header, Headers, HttpMethod};
pub use response::{ApiResponse, StatusCode};
pub use session::{RefreshRequest, RefreshedTokens, SESSION_STORAGE_KEY, Session};
