//! Wire types for investment responses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::investment::InvestmentStatus;
use crate::domain::Pagination;

/// A single investment into a sale project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Investment {
    pub id: String,
    pub project_id: String,
    /// Investor's XRPL account.
    pub wallet_address: String,
    pub amount_xrp: Decimal,
    /// Tokens allocated for this investment, once priced.
    #[serde(default)]
    pub token_amount: Option<Decimal>,
    pub status: InvestmentStatus,
    /// XRPL transaction hash of the payment, once observed on-ledger.
    #[serde(default)]
    pub tx_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Response for investment list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentsResponse {
    pub investments: Vec<Investment>,
    pub pagination: Pagination,
}

/// Request body for `POST /investments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvestmentRequest {
    pub project_id: String,
    pub amount_xrp: Decimal,
    pub wallet_address: String,
}
