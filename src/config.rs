//! Client configuration.

use std::time::Duration;

use crate::error::SdkError;
use crate::network::Environment;

/// Immutable client configuration. Built once via [`ClientConfigBuilder`]
/// (or [`crate::client::XrplSaleClientBuilder`], which wraps it) and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key sent as `X-API-Key` on every request that has no bearer token.
    pub api_key: String,
    pub environment: Environment,
    /// Explicit base URL override. When `None`, the environment default is used.
    pub base_url: Option<String>,
    /// Per-request transport timeout.
    pub timeout: Duration,
    /// Additional attempts after the initial try. Total tries = `max_retries + 1`.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each subsequent one.
    pub base_delay: Duration,
    /// Secret used to verify inbound webhook signatures.
    pub webhook_secret: Option<String>,
    /// Log request/response summaries at debug level.
    pub debug: bool,
}

impl ClientConfig {
    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder::new(api_key)
    }

    /// Effective base URL: the override when set, else the environment default.
    pub fn resolved_base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
            .trim_end_matches('/')
            .to_string()
    }
}

pub struct ClientConfigBuilder {
    api_key: String,
    environment: Environment,
    base_url: Option<String>,
    timeout: Duration,
    max_retries: u32,
    base_delay: Duration,
    webhook_secret: Option<String>,
    debug: bool,
}

impl ClientConfigBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            environment: Environment::Production,
            base_url: None,
            timeout: Duration::from_secs(30),
            max_retries: 3,
            base_delay: Duration::from_millis(500),
            webhook_secret: None,
            debug: false,
        }
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    pub fn webhook_secret(mut self, secret: impl Into<String>) -> Self {
        self.webhook_secret = Some(secret.into());
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Validate and freeze the configuration.
    ///
    /// Fails with [`SdkError::Config`] when the API key is empty.
    pub fn build(self) -> Result<ClientConfig, SdkError> {
        if self.api_key.trim().is_empty() {
            return Err(SdkError::Config("API key must not be empty".to_string()));
        }

        Ok(ClientConfig {
            api_key: self.api_key,
            environment: self.environment,
            base_url: self.base_url,
            timeout: self.timeout,
            max_retries: self.max_retries,
            base_delay: self.base_delay,
            webhook_secret: self.webhook_secret,
            debug: self.debug,
        })
    }
}
