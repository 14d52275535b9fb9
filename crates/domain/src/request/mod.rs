//! HTTP request domain types

mod api_request;
mod header;
mod method;

pub use api_request::ApiRequest;
pub use header::{AUTHORIZATION, CONTENT_TYPE, Header, Headers};
pub use method::HttpMethod;
