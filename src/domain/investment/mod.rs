//! Investments: status enum, wire types, sub-client.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use wire::{CreateInvestmentRequest, Investment, InvestmentsResponse};

use serde::{Deserialize, Serialize};

/// Investment settlement state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentStatus {
    Pending,
    Confirmed,
    Refunded,
}

impl InvestmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Refunded => "refunded",
        }
    }
}

impl std::fmt::Display for InvestmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
