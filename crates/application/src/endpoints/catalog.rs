//! Catalog reference data.

use sc_domain::catalog::{
    CategoryNode, Job, LocationNode, LocationQuery, LocationTreePayload, extract_regions,
};
use sc_domain::{ApiRequest, ListPayload, unwrap_list};

use crate::client::ApiClient;
use crate::error::ApplicationResult;
use crate::ports::{HttpTransport, SessionStorage};

impl<T: HttpTransport, S: SessionStorage> ApiClient<T, S> {
    /// Lists every trade.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn jobs(&self) -> ApplicationResult<Vec<Job>> {
        let request = ApiRequest::get("/api/catalog/jobs/").query_param("page_size", 1000);
        let payload: Option<ListPayload<Job>> = self.send_json(request).await?;
        Ok(unwrap_list(payload))
    }

    /// Lists the trades promoted on the home page.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn featured_jobs(&self) -> ApplicationResult<Vec<Job>> {
        let payload: Option<ListPayload<Job>> = self
            .send_json(ApiRequest::get("/api/catalog/jobs/featured/"))
            .await?;
        Ok(unwrap_list(payload))
    }

    /// Fetches the category tree.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn categories_tree(&self) -> ApplicationResult<Vec<CategoryNode>> {
        let payload: Option<ListPayload<CategoryNode>> = self
            .send_json(ApiRequest::get("/api/catalog/categories/tree/"))
            .await?;
        Ok(unwrap_list(payload))
    }

    /// Fetches the location tree and returns its regions, each with its full
    /// subtree, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn locations_tree(&self) -> ApplicationResult<Vec<LocationNode>> {
        let payload: Option<LocationTreePayload> = self
            .send_json(ApiRequest::get("/api/catalog/locations/tree/"))
            .await?;
        Ok(extract_regions(
            payload.map(LocationTreePayload::into_roots).unwrap_or_default(),
        ))
    }

    /// Lists locations as a flat list.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn locations(&self, query: &LocationQuery) -> ApplicationResult<Vec<LocationNode>> {
        let request = ApiRequest::get("/api/catalog/locations/").with_query(query)?;
        let payload: Option<ListPayload<LocationNode>> = self.send_json(request).await?;
        Ok(unwrap_list(payload))
    }
}
