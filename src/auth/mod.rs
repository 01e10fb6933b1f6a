//! Wallet-based authentication — challenge generation, login, session state.
//!
//! ## Security Model
//!
//! - The SDK never holds wallet keys. The caller requests a challenge,
//!   signs it with their own XRPL wallet tooling, and passes the signature
//!   to `client.auth().login(...)`.
//! - On success the platform issues a bearer token. The executor stores it
//!   internally and injects `Authorization: Bearer <token>` on subsequent
//!   requests, superseding the `X-API-Key` header. The token is never
//!   exposed via a public accessor.
//! - Logout is local: token-based sessions expire server-side on their own;
//!   `clear_token()` drops the bearer and falls back to API-key auth.

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for `POST /auth/challenge`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeRequest {
    pub wallet_address: String,
}

/// A one-time challenge to be signed by the user's wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthChallenge {
    pub challenge: String,
    pub expires_at: DateTime<Utc>,
}

/// Login request body sent to the backend after external signing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub wallet_address: String,
    /// Hex signature over the challenge bytes.
    pub signature: String,
    pub challenge: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub wallet_address: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    /// Whether the session is still valid (not expired).
    pub fn is_valid(&self) -> bool {
        Utc::now() < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_session_validity_tracks_expiry() {
        let mut session = AuthSession {
            token: "tok_1".to_string(),
            wallet_address: "rExampleWallet1".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        };
        assert!(session.is_valid());

        session.expires_at = Utc::now() - Duration::hours(1);
        assert!(!session.is_valid());
    }

    #[test]
    fn test_login_request_wire_shape() {
        let req = LoginRequest {
            wallet_address: "rExampleWallet1".to_string(),
            signature: "deadbeef".to_string(),
            challenge: "xrplsale-auth-42".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["wallet_address"], "rExampleWallet1");
        assert_eq!(json["signature"], "deadbeef");
        assert_eq!(json["challenge"], "xrplsale-auth-42");
    }
}
