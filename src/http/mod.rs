//! HTTP execution pipeline: transport seam, URL builder, retry policy,
//! response classifier, and the `XrplSaleHttp` executor that ties them
//! together.
//!
//! The pipeline pieces are pure and always available; the executor itself
//! needs the `http` feature.

pub mod classify;
pub mod retry;
pub mod transport;
pub mod url;

#[cfg(feature = "http")]
pub mod client;

pub use retry::{RetryConfig, RetryDecision};
pub use transport::{Method, Transport, TransportRequest, TransportResponse};

/// Cancellation signal accepted by `XrplSaleHttp::execute_with_token`.
pub use tokio_util::sync::CancellationToken;

#[cfg(feature = "http")]
pub use client::{RequestSpec, XrplSaleHttp, USER_AGENT};
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
