//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod http_transport;
mod session_storage;

pub use http_transport::{HttpTransport, OutboundRequest, TransportError};
pub use session_storage::{SessionStorage, StorageError};
