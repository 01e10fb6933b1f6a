//! Wire types for analytics responses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Platform-wide totals from `GET /analytics/platform`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformSummary {
    pub total_projects: u64,
    pub active_projects: u64,
    pub total_raised_xrp: Decimal,
    pub total_investors: u64,
}

/// Per-project metrics from `GET /projects/{id}/analytics`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectAnalytics {
    pub project_id: String,
    pub period: String,
    pub raised_xrp: Decimal,
    pub investor_count: u64,
    pub investment_count: u64,
    pub average_investment_xrp: Decimal,
}

/// One entry from `GET /analytics/trending`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendingProject {
    pub project_id: String,
    pub name: String,
    pub raised_xrp: Decimal,
    pub rank: u32,
}
