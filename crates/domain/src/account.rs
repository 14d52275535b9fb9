//! Account and sign-in wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credentials for `POST /api/auth/login/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    /// Phone number used as the account identifier.
    pub phone: String,
    /// Account password.
    pub password: String,
}

/// Token pair returned by the login endpoint.
///
/// The access token is read from `access`, falling back to `token` or `key`
/// for backends that name it differently.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Issued access token.
    #[serde(default, alias = "token", alias = "key")]
    pub access: Option<String>,
    /// Issued refresh token.
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Body of `POST /api/auth/register/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterPayload {
    /// Phone number used as the account identifier.
    pub phone: String,
    /// Account password.
    pub password: String,
    /// Trading name.
    pub nom_entreprise: String,
    /// Trade (job) identifier.
    pub metier_id: u64,
    /// Geographic zone identifier.
    pub zone_id: u64,
    /// Number for voice calls.
    pub telephone_appel: String,
    /// Number for WhatsApp.
    pub telephone_whatsapp: String,
    /// Latitude of the business.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude of the business.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Free-text presentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response of the registration endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    /// Identifier of the created user.
    pub user_id: u64,
    /// Registered phone number.
    pub phone: String,
    /// Human-readable status message.
    #[serde(default)]
    pub message: String,
}

/// Body of `POST /api/auth/verify-whatsapp/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyWhatsappPayload {
    /// Phone number the code was sent to.
    pub phone: String,
    /// One-time code.
    pub code: String,
}

/// Response of the WhatsApp verification endpoint; signs the user in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerifyWhatsappResponse {
    /// Human-readable status message.
    #[serde(default)]
    pub detail: String,
    /// Identifier of the verified user.
    pub user_id: u64,
    /// Verified phone number.
    pub phone: String,
    /// Whether the number is now verified.
    pub whatsapp_verified: bool,
    /// Issued access token.
    pub access: String,
    /// Issued refresh token.
    pub refresh: String,
}

/// Body of `POST /api/auth/resend-otp/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResendOtpPayload {
    /// Phone number to send a new code to.
    pub phone: String,
}

/// Response of the OTP resend endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResendOtpResponse {
    /// Human-readable status message.
    #[serde(default)]
    pub detail: String,
    /// When the new code expires.
    pub expires_at: DateTime<Utc>,
}

/// The signed-in user, as returned by `GET /api/auth/me/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// User identifier.
    pub id: u64,
    /// Phone number.
    pub phone: String,
    /// Optional e-mail address.
    #[serde(default)]
    pub email: Option<String>,
    /// Account role.
    #[serde(default)]
    pub role: Option<String>,
    /// Whether the WhatsApp number is verified.
    #[serde(default)]
    pub whatsapp_verified: bool,
    /// Registration date.
    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
}
