//! Professional search and favorites.

use sc_domain::pro::{FavoriteItem, NewFavorite, PageQuery, ProSearchParams, Professional};
use sc_domain::{ApiRequest, ListPayload, Paginated, ensure_paginated};

use crate::client::ApiClient;
use crate::error::ApplicationResult;
use crate::ports::{HttpTransport, SessionStorage};

const FAVORITES_PATH: &str = "/api/pros/favoris/";

impl<T: HttpTransport, S: SessionStorage> ApiClient<T, S> {
    /// Searches the directory.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn search_pros(
        &self,
        params: &ProSearchParams,
    ) -> ApplicationResult<Paginated<Professional>> {
        let request = ApiRequest::get("/api/pros/recherche/").with_query(params)?;
        let payload: Option<ListPayload<Professional>> = self.send_json(request).await?;
        Ok(ensure_paginated(payload))
    }

    /// Lists the signed-in user's favorites.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn list_favorites(&self, page: PageQuery) -> ApplicationResult<Paginated<FavoriteItem>> {
        let request = ApiRequest::get(FAVORITES_PATH).with_query(&page)?;
        let payload: Option<ListPayload<FavoriteItem>> = self.send_json(request).await?;
        Ok(ensure_paginated(payload))
    }

    /// Bookmarks a professional.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn add_favorite(&self, pro_id: u64) -> ApplicationResult<FavoriteItem> {
        let request = ApiRequest::post(FAVORITES_PATH).with_json(&NewFavorite {
            professionnel: pro_id,
        })?;
        self.send_json(request).await
    }

    /// Removes a bookmark, addressed by the professional's id.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn remove_favorite(&self, pro_id: u64) -> ApplicationResult<()> {
        self.execute(ApiRequest::delete(format!("{FAVORITES_PATH}{pro_id}/")))
            .await?;
        Ok(())
    }
}
