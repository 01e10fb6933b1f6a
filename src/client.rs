//! High-level client — `XrplSaleClient` with nested sub-client accessors.
//!
//! Each resource has its own sub-client (`domain/<name>/client.rs`,
//! `auth/client.rs`, `webhook/client.rs`). This module keeps the builder,
//! shared session state, and accessor methods.

use std::sync::Arc;
use std::time::Duration;

use async_lock::RwLock;

use crate::auth::client::Auth;
use crate::auth::AuthSession;
use crate::config::{ClientConfig, ClientConfigBuilder};
use crate::domain::analytics::client::Analytics;
use crate::domain::investment::client::Investments;
use crate::domain::project::client::Projects;
use crate::error::SdkError;
use crate::http::{Transport, XrplSaleHttp};
use crate::network::Environment;
use crate::webhook::client::Webhooks;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::analytics::client::Analytics as AnalyticsClient;
pub use crate::domain::investment::client::Investments as InvestmentsClient;
pub use crate::domain::project::client::Projects as ProjectsClient;
pub use crate::webhook::client::Webhooks as WebhooksClient;

/// The primary entry point for the XRPL.Sale SDK.
///
/// Provides nested sub-client accessors for each resource:
/// `client.projects()`, `client.investments()`, etc. Safe to share across
/// tasks — clones are cheap handles onto the same executor and session.
pub struct XrplSaleClient {
    pub(crate) http: XrplSaleHttp,
    /// Session established by `auth().login()`, if any.
    pub(crate) session: Arc<RwLock<Option<AuthSession>>>,
}

impl XrplSaleClient {
    pub fn builder(api_key: impl Into<String>) -> XrplSaleClientBuilder {
        XrplSaleClientBuilder::new(api_key)
    }

    /// Build directly from a prepared configuration.
    pub fn new(config: ClientConfig) -> Result<Self, SdkError> {
        Ok(Self {
            http: XrplSaleHttp::new(config)?,
            session: Arc::new(RwLock::new(None)),
        })
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn projects(&self) -> Projects<'_> {
        Projects { client: self }
    }

    pub fn investments(&self) -> Investments<'_> {
        Investments { client: self }
    }

    pub fn analytics(&self) -> Analytics<'_> {
        Analytics { client: self }
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks { client: self }
    }

    /// The executor behind the sub-clients, for callers issuing requests
    /// the typed surface does not cover.
    pub fn http(&self) -> &XrplSaleHttp {
        &self.http
    }

    /// Dispose the client: aborts in-flight requests and makes every
    /// subsequent call fail fast with a client-closed error. Idempotent.
    /// The transport pool is released once the last clone drops.
    pub fn close(&self) {
        self.http.close();
    }

    pub fn is_closed(&self) -> bool {
        self.http.is_closed()
    }
}

impl Clone for XrplSaleClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            session: self.session.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct XrplSaleClientBuilder {
    config: ClientConfigBuilder,
    transport: Option<Arc<dyn Transport>>,
}

impl XrplSaleClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            config: ClientConfigBuilder::new(api_key),
            transport: None,
        }
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.config = self.config.environment(environment);
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.config = self.config.base_url(url);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config = self.config.max_retries(max_retries);
        self
    }

    pub fn base_delay(mut self, base_delay: Duration) -> Self {
        self.config = self.config.base_delay(base_delay);
        self
    }

    pub fn webhook_secret(mut self, secret: impl Into<String>) -> Self {
        self.config = self.config.webhook_secret(secret);
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.config = self.config.debug(debug);
        self
    }

    /// Substitute the HTTP transport (tests, alternative HTTP stacks).
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<XrplSaleClient, SdkError> {
        let config = self.config.build()?;
        let http = match self.transport {
            Some(transport) => XrplSaleHttp::with_transport(config, transport),
            None => XrplSaleHttp::new(config)?,
        };
        Ok(XrplSaleClient {
            http,
            session: Arc::new(RwLock::new(None)),
        })
    }
}
