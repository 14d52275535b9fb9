//! Professional directory types.

use serde::{Deserialize, Serialize};

/// A named reference (trade or location) embedded in a professional profile.
///
/// The API sends the label as `nom` or `name` depending on the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    /// Identifier.
    pub id: u64,
    /// French label.
    #[serde(default)]
    pub nom: Option<String>,
    /// English label.
    #[serde(default)]
    pub name: Option<String>,
    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
}

impl NamedRef {
    /// Returns whichever label is present.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.nom.as_deref().or(self.name.as_deref())
    }
}

/// Public profile of a professional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professional {
    /// Identifier.
    pub id: u64,
    /// Trading name.
    #[serde(default)]
    pub nom_commercial: Option<String>,
    /// Personal name, used when no trading name is set.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Trade.
    #[serde(default)]
    pub job: Option<NamedRef>,
    /// Location.
    #[serde(default)]
    pub location: Option<NamedRef>,
    /// Profile photo path or URL.
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Number for voice calls.
    #[serde(default)]
    pub telephone_appel: Option<String>,
    /// Number for WhatsApp.
    #[serde(default)]
    pub telephone_whatsapp: Option<String>,
    /// Whether the professional holds an active subscription.
    #[serde(default)]
    pub is_premium: bool,
    /// Whether the professional is currently online.
    #[serde(default)]
    pub est_en_ligne: bool,
    /// Free-text presentation.
    #[serde(default)]
    pub description: Option<String>,
    /// Distance from the search point, when searching by position.
    #[serde(default)]
    pub distance_km: Option<f64>,
}

impl Professional {
    /// Returns the name to display: trading name, else personal name.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.nom_commercial
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.full_name.as_deref())
    }
}

/// A bookmarked professional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteItem {
    /// Favorite identifier.
    pub id: u64,
    /// Identifier of the bookmarked professional.
    pub professionnel: u64,
    /// Expanded profile of the bookmarked professional.
    pub professionnel_details: Professional,
    /// Creation timestamp, as sent by the API.
    pub cree_le: String,
}

/// Body of `POST /api/pros/favoris/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewFavorite {
    /// Identifier of the professional to bookmark.
    pub professionnel: u64,
}

/// Online filter for the professional search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OnlineStatus {
    /// Currently online.
    Online,
    /// Currently offline.
    Offline,
}

/// Sort order for the professional search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProSort {
    /// Nearest first; requires `lat`/`lng`.
    Distance,
}

/// Query of `GET /api/pros/recherche/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProSearchParams {
    /// Trade identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metier: Option<u64>,
    /// Geographic zone identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_geographique: Option<u64>,
    /// Free-text search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Online filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statut_en_ligne: Option<OnlineStatus>,
    /// Latitude of the search point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// Longitude of the search point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    /// Search radius around the point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_km: Option<f64>,
    /// Sort order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<ProSort>,
    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Page selection for paginated endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}
