//! Request executor — `XrplSaleHttp`.
//!
//! The facade every resource sub-client calls. Resolves the URL, applies
//! auth headers, invokes the transport under the retry policy, and routes
//! the outcome through the response classifier. Internal to the SDK — the
//! high-level client wraps this.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_lock::RwLock;
use futures::future::{select, Either};
use futures::pin_mut;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::config::ClientConfig;
use crate::error::{ApiError, SdkError};
use crate::http::classify::decode_response;
use crate::http::retry::RetryConfig;
use crate::http::transport::{Method, Transport, TransportRequest};
use crate::http::url::build_url;

#[cfg(feature = "http")]
use crate::http::transport::ReqwestTransport;

/// Fixed user-agent identifier sent on every request.
pub const USER_AGENT: &str = concat!("xrplsale-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// One request to be executed: method, endpoint path, ordered query pairs,
/// optional JSON body.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    pub endpoint: String,
    /// Ordered pairs, never a map — URL output must be deterministic.
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl RequestSpec {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Get, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Post, endpoint)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// Low-level request executor for the XRPL.Sale REST API.
pub struct XrplSaleHttp {
    base_url: String,
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
    /// Bearer token that, when set, supersedes the `X-API-Key` header.
    /// NEVER exposed publicly.
    auth_token: Arc<RwLock<Option<String>>>,
    /// Set by `close()`. Requests fail fast once this flips.
    closed: Arc<AtomicBool>,
    /// Cancelled by `close()` to abort in-flight requests.
    shutdown: CancellationToken,
}

impl XrplSaleHttp {
    /// Build an executor over the default reqwest transport. The connection
    /// pool is acquired here and released when the last clone drops.
    #[cfg(feature = "http")]
    pub fn new(config: ClientConfig) -> Result<Self, SdkError> {
        let transport = ReqwestTransport::new(config.timeout)
            .map_err(|e| SdkError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Build an executor over a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: config.resolved_base_url(),
            config: Arc::new(config),
            transport,
            auth_token: Arc::new(RwLock::new(None)),
            closed: Arc::new(AtomicBool::new(false)),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replace the bearer token. A request that already read the old value
    /// completes with it — no mid-flight upgrade.
    pub async fn set_auth_token(&self, token: Option<String>) {
        *self.auth_token.write().await = token;
    }

    pub async fn clear_auth_token(&self) {
        *self.auth_token.write().await = None;
    }

    pub async fn has_auth_token(&self) -> bool {
        self.auth_token.read().await.is_some()
    }

    /// Dispose the executor: in-flight requests abort promptly and every
    /// subsequent call fails with [`ApiError::ClientClosed`].
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.shutdown.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    // ── Convenience wrappers ─────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: Vec<(String, String)>,
    ) -> Result<T, ApiError> {
        let mut spec = RequestSpec::get(endpoint);
        spec.query = query;
        self.execute(spec).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(RequestSpec::post(endpoint).json(body)?).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(RequestSpec::new(Method::Put, endpoint).json(body)?)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.execute(RequestSpec::new(Method::Delete, endpoint)).await
    }

    // ── Execution ────────────────────────────────────────────────────────

    /// Execute a request with no caller-side cancellation.
    pub async fn execute<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T, ApiError> {
        self.execute_with_token(spec, &CancellationToken::new()).await
    }

    /// Execute a request. `cancel` aborts an in-flight transport wait
    /// promptly and skips any pending retry delay.
    pub async fn execute_with_token<T: DeserializeOwned>(
        &self,
        spec: RequestSpec,
        cancel: &CancellationToken,
    ) -> Result<T, ApiError> {
        if self.is_closed() {
            return Err(ApiError::ClientClosed);
        }

        let url = format!("{}{}", self.base_url, build_url(&spec.endpoint, &spec.query));
        let body = match &spec.body {
            Some(value) => Some(serde_json::to_vec(value)?),
            None => None,
        };

        let retry = RetryConfig {
            max_retries: self.config.max_retries,
            base_delay: self.config.base_delay,
            ..RetryConfig::default()
        };

        let mut attempt: u32 = 0;
        loop {
            let request = self.build_request(&spec, &url, body.clone()).await;
            if self.config.debug {
                tracing::debug!(method = %spec.method, url = %url, attempt, "sending request");
            }

            let outcome = self.race(self.transport.send(request), cancel).await?;
            match outcome {
                Ok(resp) => {
                    if self.config.debug {
                        tracing::debug!(status = resp.status, url = %url, "received response");
                    }
                    return decode_response(resp);
                }
                Err(cause) => {
                    let decision = retry.decide(attempt, &cause);
                    if !decision.retry {
                        return Err(ApiError::Transport {
                            attempts: attempt + 1,
                            source: cause,
                        });
                    }
                    tracing::debug!(
                        attempt = attempt + 1,
                        max = retry.max_retries,
                        delay_ms = decision.delay.as_millis() as u64,
                        "Retrying {} {}",
                        spec.method,
                        spec.endpoint
                    );
                    self.sleep(decision.delay, cancel).await?;
                    attempt += 1;
                }
            }
        }
    }

    async fn build_request(
        &self,
        spec: &RequestSpec,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> TransportRequest {
        let mut headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), USER_AGENT.to_string()),
        ];

        // Bearer takes precedence over the API key whenever both exist.
        match self.auth_token.read().await.as_ref() {
            Some(token) => headers.push(("Authorization".to_string(), format!("Bearer {token}"))),
            None => headers.push(("X-API-Key".to_string(), self.config.api_key.clone())),
        }

        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        TransportRequest {
            method: spec.method,
            url: url.to_string(),
            headers,
            body,
        }
    }

    /// Cancellable backoff sleep.
    async fn sleep(&self, delay: Duration, cancel: &CancellationToken) -> Result<(), ApiError> {
        self.race(futures_timer::Delay::new(delay), cancel).await
    }

    /// Race a future against the caller token and the shutdown token.
    async fn race<F: std::future::Future>(
        &self,
        fut: F,
        cancel: &CancellationToken,
    ) -> Result<F::Output, ApiError> {
        let caller = cancel.cancelled();
        let shutdown = self.shutdown.cancelled();
        pin_mut!(fut);
        pin_mut!(caller);
        pin_mut!(shutdown);

        match select(fut, select(caller, shutdown)).await {
            Either::Left((out, _)) => Ok(out),
            Either::Right(_) => {
                if self.is_closed() {
                    Err(ApiError::ClientClosed)
                } else {
                    Err(ApiError::Cancelled)
                }
            }
        }
    }
}

impl Clone for XrplSaleHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            config: self.config.clone(),
            transport: self.transport.clone(),
            auth_token: self.auth_token.clone(),
            closed: self.closed.clone(),
            shutdown: self.shutdown.clone(),
        }
    }
}
