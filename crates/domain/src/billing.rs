//! Subscription and checkout types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subscription state of the signed-in professional (`GET /api/billing/me/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionStatus {
    /// Backend status label (e.g. `ACTIVE`, `EXPIRED`).
    #[serde(default)]
    pub status: Option<String>,
    /// Whether the subscription is active; older payloads call it `active`.
    #[serde(default, alias = "active")]
    pub is_active: bool,
    /// Start of the current period.
    #[serde(default)]
    pub start_at: Option<DateTime<Utc>>,
    /// End of the current period; older payloads call it `expires_at`.
    #[serde(default, alias = "expires_at")]
    pub end_at: Option<DateTime<Utc>>,
    /// Days left in the current period, when the backend computes it.
    #[serde(default)]
    pub days_left: Option<i64>,
    /// Last payment reference.
    #[serde(default)]
    pub last_payment: Option<serde_json::Value>,
}

impl SubscriptionStatus {
    /// Days left before `end_at`, preferring the backend's own count.
    #[must_use]
    pub fn days_remaining(&self, now: DateTime<Utc>) -> Option<i64> {
        self.days_left
            .or_else(|| self.end_at.map(|end| (end - now).num_days().max(0)))
    }
}

/// Body of `POST /api/billing/checkout/`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CheckoutRequest {
    /// Amount in XOF; the backend default applies when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
}

/// A payment session opened with the payment provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// URL where the user completes the payment.
    pub checkout_url: String,
}
