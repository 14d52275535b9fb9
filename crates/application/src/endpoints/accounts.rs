//! Registration, sign-in and profile endpoints.

use sc_domain::account::{
    Account, LoginPayload, LoginResponse, RegisterPayload, RegisterResponse, ResendOtpPayload,
    ResendOtpResponse, VerifyWhatsappPayload, VerifyWhatsappResponse,
};
use sc_domain::{ApiRequest, Session};
use tracing::info;

use crate::client::ApiClient;
use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::{HttpTransport, SessionStorage};

/// Path of the login endpoint.
pub const LOGIN_PATH: &str = "/api/auth/login/";

impl<T: HttpTransport, S: SessionStorage> ApiClient<T, S> {
    /// Creates a professional account; a WhatsApp code is sent to the phone.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn register(&self, payload: &RegisterPayload) -> ApplicationResult<RegisterResponse> {
        self.send_json(ApiRequest::post("/api/auth/register/").with_json(payload)?)
            .await
    }

    /// Signs in and stores the issued tokens.
    ///
    /// A 401 for bad credentials is returned as is; it never triggers a refresh.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged, or
    /// [`ApplicationError::InvalidResponse`] if no access token was issued.
    pub async fn login(&self, payload: &LoginPayload) -> ApplicationResult<Session> {
        let tokens: LoginResponse = self
            .send_json(ApiRequest::post(LOGIN_PATH).with_json(payload)?)
            .await?;

        let access = tokens
            .access
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApplicationError::InvalidResponse("no access token issued".into()))?;

        self.session().set_tokens(access, tokens.refresh).await;
        info!("signed in");
        Ok(self.session().snapshot().await)
    }

    /// Confirms the WhatsApp code and signs the user in.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn verify_whatsapp(
        &self,
        payload: &VerifyWhatsappPayload,
    ) -> ApplicationResult<VerifyWhatsappResponse> {
        let verified: VerifyWhatsappResponse = self
            .send_json(ApiRequest::post("/api/auth/verify-whatsapp/").with_json(payload)?)
            .await?;

        self.session()
            .set_tokens(verified.access.clone(), Some(verified.refresh.clone()))
            .await;
        info!(user_id = verified.user_id, "phone verified, signed in");
        Ok(verified)
    }

    /// Sends a new WhatsApp code.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn resend_otp(&self, phone: &str) -> ApplicationResult<ResendOtpResponse> {
        let payload = ResendOtpPayload {
            phone: phone.to_string(),
        };
        self.send_json(ApiRequest::post("/api/auth/resend-otp/").with_json(&payload)?)
            .await
    }

    /// Fetches the signed-in account.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged.
    pub async fn me(&self) -> ApplicationResult<Account> {
        self.send_json(ApiRequest::get("/api/auth/me/")).await
    }

    /// Signs out locally.
    pub async fn logout(&self) {
        self.session().clear().await;
        info!("signed out");
    }
}
