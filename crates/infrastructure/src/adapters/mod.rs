//! Adapters for the application ports.

mod reqwest_transport;

pub use reqwest_transport::{MAX_REDIRECTS, ReqwestTransport};
