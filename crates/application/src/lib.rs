//! SC Application - Authenticated client, ports and endpoints
//!
//! This crate defines the application layer with:
//! - Port traits for the HTTP transport and session storage
//! - The session store and the single-flight token refresh
//! - The bare and authenticated clients
//! - Typed wrappers for every backend endpoint
//! - Application-level error handling

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod ports;
pub mod session;

pub use auth::{RefreshCoordinator, RefreshTicket};
pub use client::{ApiClient, BareClient, ClientConfig};
pub use error::{ApplicationError, ApplicationResult};
pub use ports::{HttpTransport, OutboundRequest, SessionStorage, StorageError, TransportError};
pub use session::SessionStore;
