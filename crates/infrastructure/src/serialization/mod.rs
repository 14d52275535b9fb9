//! Stable JSON encoding for files written by the client.
//!
//! Output uses 2-space indentation and a trailing newline so that the
//! session file reads cleanly when inspected by hand.

mod json;

pub use json::*;
