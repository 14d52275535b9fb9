//! Single-flight coordination of token refreshes.
//!
//! The first request to need a refresh becomes the leader and receives a
//! [`RefreshLease`]; every request that needs one while the lease is held is
//! queued and receives the leader's outcome. The in-flight flag is cleared
//! when the lease is settled or dropped, whichever comes first.

use std::mem;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;
use tracing::debug;

use crate::error::ApplicationError;

/// Outcome of a refresh: the new access token, or why it could not be obtained.
pub type RefreshOutcome = Result<String, ApplicationError>;

#[derive(Debug, Default)]
struct RefreshState {
    in_flight: bool,
    waiters: Vec<oneshot::Sender<RefreshOutcome>>,
}

/// Owner of the "refresh in flight" flag and the queue of waiting requests.
///
/// Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct RefreshCoordinator {
    state: Arc<Mutex<RefreshState>>,
}

/// What a request that needs a fresh token should do.
#[derive(Debug)]
pub enum RefreshTicket {
    /// No refresh was running: perform it and settle the lease.
    Leader(RefreshLease),
    /// A refresh is running: wait for its outcome.
    Waiter(PendingRefresh),
}

impl RefreshCoordinator {
    /// Creates a coordinator with no refresh in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the refresh or queues behind the one in flight.
    #[must_use]
    pub fn join(&self) -> RefreshTicket {
        let mut state = self.state.lock();
        if state.in_flight {
            let (sender, receiver) = oneshot::channel();
            state.waiters.push(sender);
            debug!(queued = state.waiters.len(), "queued behind in-flight refresh");
            RefreshTicket::Waiter(PendingRefresh { receiver })
        } else {
            state.in_flight = true;
            RefreshTicket::Leader(RefreshLease {
                state: Arc::clone(&self.state),
                settled: false,
            })
        }
    }

    /// Returns true while a refresh is in flight.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.state.lock().in_flight
    }

    /// Returns the number of requests queued behind the current refresh.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.lock().waiters.len()
    }
}

/// The leader's hold on the in-flight refresh.
#[derive(Debug)]
#[must_use = "dropping the lease abandons the refresh"]
pub struct RefreshLease {
    state: Arc<Mutex<RefreshState>>,
    settled: bool,
}

impl RefreshLease {
    /// Ends the refresh and hands `outcome` to every queued request.
    ///
    /// Returns the number of requests released.
    pub fn settle(mut self, outcome: &RefreshOutcome) -> usize {
        let waiters = self.release();
        let released = waiters.len();
        for waiter in waiters {
            // The waiting request may have been dropped; nothing to deliver then.
            let _ = waiter.send(outcome.clone());
        }
        released
    }

    fn release(&mut self) -> Vec<oneshot::Sender<RefreshOutcome>> {
        self.settled = true;
        let mut state = self.state.lock();
        state.in_flight = false;
        mem::take(&mut state.waiters)
    }
}

impl Drop for RefreshLease {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        for waiter in self.release() {
            let _ = waiter.send(Err(ApplicationError::RefreshAborted));
        }
    }
}

/// A queued request's handle on the in-flight refresh.
#[derive(Debug)]
pub struct PendingRefresh {
    receiver: oneshot::Receiver<RefreshOutcome>,
}

impl PendingRefresh {
    /// Waits for the leader's outcome.
    pub async fn wait(self) -> RefreshOutcome {
        self.receiver
            .await
            .unwrap_or(Err(ApplicationError::RefreshAborted))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lease(ticket: RefreshTicket) -> RefreshLease {
        match ticket {
            RefreshTicket::Leader(lease) => lease,
            RefreshTicket::Waiter(_) => panic!("expected to lead the refresh"),
        }
    }

    fn waiter(ticket: RefreshTicket) -> PendingRefresh {
        match ticket {
            RefreshTicket::Waiter(pending) => pending,
            RefreshTicket::Leader(_) => panic!("expected to queue behind the refresh"),
        }
    }

    #[tokio::test]
    async fn only_the_first_joiner_leads() {
        let coordinator = RefreshCoordinator::new();
        let leader = lease(coordinator.join());
        let first = waiter(coordinator.join());
        let second = waiter(coordinator.join());

        assert!(coordinator.is_refreshing());
        assert_eq!(coordinator.pending(), 2);

        let released = leader.settle(&Ok("t2".to_string()));

        assert_eq!(released, 2);
        assert!(!coordinator.is_refreshing());
        assert_eq!(coordinator.pending(), 0);
        assert_eq!(first.wait().await, Ok("t2".to_string()));
        assert_eq!(second.wait().await, Ok("t2".to_string()));
    }

    #[tokio::test]
    async fn failure_reaches_every_waiter() {
        let coordinator = RefreshCoordinator::new();
        let leader = lease(coordinator.join());
        let queued = waiter(coordinator.join());

        leader.settle(&Err(ApplicationError::MissingRefreshToken));

        assert_eq!(queued.wait().await, Err(ApplicationError::MissingRefreshToken));
    }

    #[tokio::test]
    async fn dropped_lease_clears_flag_and_aborts_waiters() {
        let coordinator = RefreshCoordinator::new();
        let leader = lease(coordinator.join());
        let queued = waiter(coordinator.join());

        drop(leader);

        assert!(!coordinator.is_refreshing());
        assert_eq!(queued.wait().await, Err(ApplicationError::RefreshAborted));
    }

    #[test]
    fn next_refresh_can_start_after_settling() {
        let coordinator = RefreshCoordinator::new();
        lease(coordinator.join()).settle(&Ok("t2".to_string()));

        let again = lease(coordinator.join());
        assert!(coordinator.is_refreshing());
        assert_eq!(again.settle(&Ok("t3".to_string())), 0);
    }
}
