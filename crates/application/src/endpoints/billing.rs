//! Subscription status and checkout.

use sc_domain::ApiRequest;
use sc_domain::billing::{CheckoutRequest, CheckoutSession, SubscriptionStatus};

use crate::client::ApiClient;
use crate::error::ApplicationResult;
use crate::ports::{HttpTransport, SessionStorage};

impl<T: HttpTransport, S: SessionStorage> ApiClient<T, S> {
    /// Fetches the signed-in professional's subscription.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn subscription(&self) -> ApplicationResult<SubscriptionStatus> {
        self.send_json(ApiRequest::get("/api/billing/me/")).await
    }

    /// Opens a payment session; `None` uses the backend's default amount.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn checkout(&self, amount: Option<u64>) -> ApplicationResult<CheckoutSession> {
        let request =
            ApiRequest::post("/api/billing/checkout/").with_json(&CheckoutRequest { amount })?;
        self.send_json(request).await
    }
}
