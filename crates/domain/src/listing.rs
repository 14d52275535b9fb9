//! Classified listing types.

use serde::{Deserialize, Serialize};

/// Whether a listing offers or asks for a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    /// A service on offer.
    Offre,
    /// A service wanted.
    Demande,
}

/// Listing price; the API sends either a number or a decimal string (`"10000.00"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingPrice {
    /// Numeric price.
    Amount(f64),
    /// Decimal string price.
    Text(String),
}

impl ListingPrice {
    /// Returns the price as a number, if it parses.
    #[must_use]
    pub fn amount(&self) -> Option<f64> {
        match self {
            Self::Amount(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// A classified listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Identifier.
    pub id: u64,
    /// Title.
    #[serde(default)]
    pub titre: Option<String>,
    /// Raw kind as sent by the API.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// City.
    #[serde(default)]
    pub ville: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Price.
    #[serde(default)]
    pub prix: Option<ListingPrice>,
    /// Whether moderation approved the listing.
    #[serde(default)]
    pub est_approuvee: Option<bool>,
    /// Creation timestamp, as sent by the API.
    #[serde(default)]
    pub cree_le: Option<String>,
}

impl Listing {
    /// Returns the kind when it is one of the known values.
    #[must_use]
    pub fn listing_kind(&self) -> Option<ListingKind> {
        match self.kind.as_deref()? {
            "offre" => Some(ListingKind::Offre),
            "demande" => Some(ListingKind::Demande),
            _ => None,
        }
    }
}

/// Body of `POST /api/annonces/creer/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingDraft {
    /// Title.
    pub titre: String,
    /// Kind.
    #[serde(rename = "type")]
    pub kind: ListingKind,
    /// Category identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorie_id: Option<u64>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prix: Option<f64>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ville: Option<String>,
}

/// Partial update sent with `PATCH /api/annonces/{id}/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListingPatch {
    /// Title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titre: Option<String>,
    /// Kind.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ListingKind>,
    /// Category identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorie_id: Option<u64>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prix: Option<f64>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ville: Option<String>,
}
