//! Webhooks sub-client — subscription management plus local verification
//! backed by the configured secret.

use serde::{Deserialize, Serialize};

use crate::client::XrplSaleClient;
use crate::error::{SdkError, WebhookError};
use crate::webhook::{construct_event, verify_signature, WebhookEvent};

/// A registered webhook subscription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebhookSubscription {
    pub id: String,
    pub url: String,
    /// Event type tags this subscription receives.
    pub events: Vec<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookSubscriptionsResponse {
    pub webhooks: Vec<WebhookSubscription>,
}

#[derive(Debug, Serialize)]
struct RegisterWebhookRequest<'a> {
    url: &'a str,
    events: &'a [String],
}

/// Sub-client for webhook operations.
pub struct Webhooks<'a> {
    pub(crate) client: &'a XrplSaleClient,
}

impl<'a> Webhooks<'a> {
    /// Register a new webhook endpoint for the given event types.
    pub async fn register(
        &self,
        url: &str,
        events: &[String],
    ) -> Result<WebhookSubscription, SdkError> {
        Ok(self
            .client
            .http
            .post("/webhooks", &RegisterWebhookRequest { url, events })
            .await?)
    }

    /// List registered webhook subscriptions.
    pub async fn list(&self) -> Result<Vec<WebhookSubscription>, SdkError> {
        let resp: WebhookSubscriptionsResponse =
            self.client.http.get("/webhooks", Vec::new()).await?;
        Ok(resp.webhooks)
    }

    /// Delete a webhook subscription.
    pub async fn delete(&self, id: &str) -> Result<(), SdkError> {
        let endpoint = format!("/webhooks/{}", urlencoding::encode(id));
        Ok(self.client.http.delete(&endpoint).await?)
    }

    /// Check an inbound delivery's signature against the configured secret.
    ///
    /// Returns `false` when no secret is configured.
    pub fn verify_signature(&self, payload: &[u8], signature_header: &str) -> bool {
        match self.client.http.config().webhook_secret.as_deref() {
            Some(secret) => verify_signature(payload, signature_header, secret),
            None => false,
        }
    }

    /// Verify an inbound delivery and parse it into a [`WebhookEvent`].
    /// Verification always happens first; an unverified payload is never
    /// parsed.
    pub fn construct_event(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<WebhookEvent, WebhookError> {
        let secret = self
            .client
            .http
            .config()
            .webhook_secret
            .as_deref()
            .ok_or(WebhookError::MissingSecret)?;
        construct_event(payload, signature_header, secret)
    }
}
