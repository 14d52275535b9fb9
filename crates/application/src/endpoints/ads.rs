//! Advertisements.

use sc_domain::ads::Ad;
use sc_domain::{ApiRequest, ListPayload, unwrap_list};
use tracing::warn;

use crate::client::ApiClient;
use crate::error::ApplicationResult;
use crate::ports::{HttpTransport, SessionStorage};

impl<T: HttpTransport, S: SessionStorage> ApiClient<T, S> {
    /// Lists the active advertisements.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn ads(&self) -> ApplicationResult<Vec<Ad>> {
        let payload: Option<ListPayload<Ad>> = self.send_json(ApiRequest::get("/api/ads/")).await?;
        Ok(unwrap_list(payload))
    }

    /// Records a click on an advertisement.
    ///
    /// Click tracking never fails the caller; errors are logged.
    pub async fn track_ad_click(&self, ad_id: u64) {
        if let Err(error) = self
            .execute(ApiRequest::post(format!("/api/ads/{ad_id}/click/")))
            .await
        {
            warn!(ad_id, %error, "ad click tracking failed");
        }
    }
}
