//! Unified SDK error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Webhook error: {0}")]
    Webhook(#[from] WebhookError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

/// A classified API failure — the only way callers learn about remote
/// errors. Raw status codes appear only inside [`ApiError::Api`].
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connection error, timeout) that survived
    /// the retry budget. `attempts` counts every try, including the first.
    #[error("transport failure after {attempts} attempt(s): {source}")]
    Transport {
        attempts: u32,
        #[source]
        source: TransportError,
    },

    /// 400 — request rejected with per-field details.
    #[error("validation failed: {message}")]
    Validation {
        message: String,
        details: Vec<ErrorDetail>,
    },

    /// 401
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// 404
    #[error("not found: {0}")]
    NotFound(String),

    /// 429 — `retry_after_secs` comes from the `Retry-After` header when present.
    #[error("rate limited: {message}")]
    RateLimited {
        message: String,
        retry_after_secs: Option<u64>,
    },

    /// Any other non-2xx status.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Malformed response body. Always fatal to the call — no partial or
    /// default object is ever returned.
    #[error("deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The caller's cancellation token fired while the request was in flight
    /// or waiting out a retry delay.
    #[error("operation cancelled")]
    Cancelled,

    /// The client was closed; no request may proceed after disposal.
    #[error("client closed")]
    ClientClosed,
}

/// Inability to complete an HTTP exchange, as opposed to a received-but-
/// unsuccessful response. The only error class the retry policy acts on.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("transport error: {0}")]
    Other(String),
}

/// Webhook verification/parsing errors.
///
/// Deliberately separate from [`ApiError`]: a bad signature is a
/// verification outcome for the receiving framework to act on, never a
/// classified API failure.
#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("no webhook secret configured")]
    MissingSecret,

    #[error("signature verification failed")]
    InvalidSignature,

    #[error("malformed webhook payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One field-level entry from a 400 validation envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub field: String,
    pub message: String,
}
