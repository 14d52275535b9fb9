//! Classified listings.

use std::collections::BTreeMap;

use sc_domain::listing::{Listing, ListingDraft, ListingPatch};
use sc_domain::{ApiRequest, ListPayload, unwrap_list};

use crate::client::ApiClient;
use crate::error::ApplicationResult;
use crate::ports::{HttpTransport, SessionStorage};

impl<T: HttpTransport, S: SessionStorage> ApiClient<T, S> {
    /// Lists public listings matching `filters` (e.g. `ville`, `type`).
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn list_listings(
        &self,
        filters: &BTreeMap<String, String>,
    ) -> ApplicationResult<Vec<Listing>> {
        let request = ApiRequest::get("/api/annonces/").with_query(filters)?;
        let payload: Option<ListPayload<Listing>> = self.send_json(request).await?;
        Ok(unwrap_list(payload))
    }

    /// Lists the signed-in professional's own listings.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn my_listings(&self) -> ApplicationResult<Vec<Listing>> {
        let payload: Option<ListPayload<Listing>> = self
            .send_json(ApiRequest::get("/api/annonces/mes-annonces/"))
            .await?;
        Ok(unwrap_list(payload))
    }

    /// Fetches one listing.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn listing(&self, id: u64) -> ApplicationResult<Listing> {
        self.send_json(ApiRequest::get(format!("/api/annonces/{id}/")))
            .await
    }

    /// Publishes a listing; it stays hidden until moderation approves it.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn create_listing(&self, draft: &ListingDraft) -> ApplicationResult<Listing> {
        self.send_json(ApiRequest::post("/api/annonces/creer/").with_json(draft)?)
            .await
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn update_listing(&self, id: u64, patch: &ListingPatch) -> ApplicationResult<Listing> {
        self.send_json(ApiRequest::patch(format!("/api/annonces/{id}/")).with_json(patch)?)
            .await
    }

    /// Deletes a listing.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn delete_listing(&self, id: u64) -> ApplicationResult<()> {
        self.execute(ApiRequest::delete(format!("/api/annonces/{id}/")))
            .await?;
        Ok(())
    }
}
