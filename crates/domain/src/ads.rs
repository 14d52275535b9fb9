//! Advertisement types.

use serde::{Deserialize, Serialize};

/// An advertisement shown on the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ad {
    /// Identifier.
    pub id: u64,
    /// Title.
    pub titre: String,
    /// Image or video path.
    #[serde(default)]
    pub fichier_url: Option<String>,
    /// Click-through URL.
    #[serde(default)]
    pub lien_redirection: Option<String>,
    /// Number for voice calls.
    #[serde(default)]
    pub telephone_appel: Option<String>,
    /// Number for WhatsApp.
    #[serde(default)]
    pub telephone_whatsapp: Option<String>,
    /// Whether the ad is currently visible.
    #[serde(default = "visible_by_default")]
    pub est_visible: bool,
}

const fn visible_by_default() -> bool {
    true
}
