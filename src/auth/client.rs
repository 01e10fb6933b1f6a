//! Auth sub-client — challenge, login, session state.

use crate::auth::{AuthChallenge, AuthSession, ChallengeRequest, LoginRequest};
use crate::client::XrplSaleClient;
use crate::error::SdkError;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a XrplSaleClient,
}

impl<'a> Auth<'a> {
    /// Request a one-time challenge for the given wallet address.
    ///
    /// The caller signs the returned challenge with their own wallet tooling
    /// and passes the signature to [`Auth::login`].
    pub async fn challenge(&self, wallet_address: &str) -> Result<AuthChallenge, SdkError> {
        let request = ChallengeRequest {
            wallet_address: wallet_address.to_string(),
        };
        Ok(self.client.http.post("/auth/challenge", &request).await?)
    }

    /// Exchange a signed challenge for a bearer token.
    ///
    /// On success the token is stored in the executor's auth state and
    /// supersedes the API key on subsequent requests. A request already in
    /// flight completes with whatever credentials it started with.
    pub async fn login(
        &self,
        wallet_address: &str,
        signature: &str,
        challenge: &str,
    ) -> Result<AuthSession, SdkError> {
        let request = LoginRequest {
            wallet_address: wallet_address.to_string(),
            signature: signature.to_string(),
            challenge: challenge.to_string(),
        };
        let session: AuthSession = self.client.http.post("/auth/login", &request).await?;

        self.client
            .http
            .set_auth_token(Some(session.token.clone()))
            .await;
        *self.client.session.write().await = Some(session.clone());

        Ok(session)
    }

    /// Install a pre-obtained bearer token directly.
    pub async fn set_token(&self, token: impl Into<String>) {
        self.client.http.set_auth_token(Some(token.into())).await;
    }

    /// Drop the bearer token and fall back to API-key auth.
    pub async fn clear_token(&self) {
        self.client.http.clear_auth_token().await;
        *self.client.session.write().await = None;
    }

    /// Current session, if a login happened through this client.
    pub async fn session(&self) -> Option<AuthSession> {
        self.client.session.read().await.clone()
    }

    /// Whether a non-expired session is present.
    pub async fn is_authenticated(&self) -> bool {
        self.client
            .session
            .read()
            .await
            .as_ref()
            .map(|s| s.is_valid())
            .unwrap_or(false)
    }
}
