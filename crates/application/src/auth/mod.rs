//! Credential recovery for the authenticated client.
//!
//! This module provides:
//! - Single-flight coordination of token refreshes
//! - The policy deciding which failures trigger a refresh

mod coordinator;
mod policy;

pub use coordinator::{PendingRefresh, RefreshCoordinator, RefreshLease, RefreshOutcome, RefreshTicket};
pub use policy::{PropagateReason, Recovery, recovery_for};
