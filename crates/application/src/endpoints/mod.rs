//! Typed wrappers for the backend endpoints.
//!
//! Each submodule adds methods to [`ApiClient`](crate::ApiClient) for one
//! area of the API. List endpoints accept both bare arrays and paginated
//! pages.

mod accounts;
mod ads;
mod billing;
mod catalog;
mod listings;
mod pros;

pub use accounts::LOGIN_PATH;
