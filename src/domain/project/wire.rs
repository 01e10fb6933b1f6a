//! Wire types for project responses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::project::ProjectStatus;
use crate::domain::Pagination;

/// A token-sale project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Currency code of the token being sold.
    pub token_currency: String,
    /// XRPL account issuing the token.
    pub issuer_address: String,
    pub status: ProjectStatus,
    pub total_supply: Decimal,
    pub raised_xrp: Decimal,
    #[serde(default)]
    pub hard_cap_xrp: Option<Decimal>,
    pub investor_count: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub launched_at: Option<DateTime<Utc>>,
}

/// Response for `GET /projects`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
    pub pagination: Pagination,
}

/// Request body for `POST /projects`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub token_currency: String,
    pub issuer_address: String,
    pub total_supply: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hard_cap_xrp: Option<Decimal>,
}
