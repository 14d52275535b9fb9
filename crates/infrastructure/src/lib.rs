//! SC Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, the environment configuration and
//! the wiring that assembles a ready-to-use client.

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod persistence;
pub mod serialization;

pub use adapters::ReqwestTransport;
pub use bootstrap::{MarketplaceClient, build_client, build_client_with};
pub use config::{ClientSettings, ConfigError};
pub use persistence::{FileSessionStorage, InMemorySessionStorage};
pub use serialization::{SerializationError, from_json_bytes, to_json_stable, to_json_stable_bytes};
