//! # XRPL.Sale SDK
//!
//! A Rust client for the XRPL.Sale token-sale platform REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Config, environments, error taxonomy, domain wire types
//! 2. **Webhooks** — HMAC-SHA256 signature verification + event parsing
//!    (available without the HTTP stack)
//! 3. **HTTP** — `XrplSaleHttp` executor: URL building, auth headers,
//!    transport-failure retries with exponential backoff, response
//!    classification, cancellation
//! 4. **High-Level Client** — `XrplSaleClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use xrplsale_sdk::prelude::*;
//!
//! let client = XrplSaleClient::builder("sk_live_...")
//!     .environment(Environment::Testnet)
//!     .build()?;
//!
//! let projects = client.projects().list(Default::default()).await?;
//! let summary = client.analytics().platform().await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Client configuration.
pub mod config;

/// Domain modules (vertical slices): enums, wire types, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Target environments and base URLs.
pub mod network;

// ── Layer 2: Webhooks ────────────────────────────────────────────────────────

/// Webhook signature verification and event parsing.
pub mod webhook;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Authentication: challenge/login flow and session types.
pub mod auth;

/// Request execution pipeline: transport, URL builder, retries,
/// classification.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `XrplSaleClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Config + environments
    pub use crate::config::{ClientConfig, ClientConfigBuilder};
    pub use crate::network::Environment;

    // Domain types — projects
    pub use crate::domain::project::{
        CreateProjectRequest, ListProjectsOptions, Project, ProjectStatus, ProjectsResponse,
    };

    // Domain types — investments
    pub use crate::domain::investment::{
        CreateInvestmentRequest, Investment, InvestmentStatus, InvestmentsResponse,
    };

    // Domain types — analytics
    pub use crate::domain::analytics::{
        Period, PlatformSummary, ProjectAnalytics, TrendingProject,
    };

    // Shared list plumbing
    pub use crate::domain::{PageOptions, Pagination, SortOrder};

    // Auth types
    pub use crate::auth::{AuthChallenge, AuthSession};

    // Webhooks
    pub use crate::webhook::{
        construct_event, verify_signature, WebhookEvent, SIGNATURE_HEADER,
    };

    // Errors
    pub use crate::error::{ApiError, ErrorDetail, SdkError, TransportError, WebhookError};

    // Executor + transport seam
    pub use crate::http::retry::{RetryConfig, RetryDecision};
    pub use crate::http::{Method, Transport, TransportRequest, TransportResponse};
    #[cfg(feature = "http")]
    pub use crate::http::{RequestSpec, XrplSaleHttp};

    // High-level client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AnalyticsClient, AuthClient, InvestmentsClient, ProjectsClient, WebhooksClient,
        XrplSaleClient, XrplSaleClientBuilder,
    };
    #[cfg(feature = "http")]
    pub use crate::webhook::client::WebhookSubscription;
}
