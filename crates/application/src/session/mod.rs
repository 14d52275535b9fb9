//! Process-wide session state backed by durable storage.

mod store;

pub use store::SessionStore;
