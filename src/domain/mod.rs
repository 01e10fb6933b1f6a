//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain enums and list options
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `client.rs` — Sub-client with the resource's HTTP methods

pub mod analytics;
pub mod investment;
pub mod project;

use serde::{Deserialize, Serialize};

/// Pagination envelope shared by list endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

/// Sort direction for list endpoints. Wire values are `"asc"` / `"desc"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Page/limit/sort options shared by list endpoints without extra filters.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageOptions {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_order: Option<SortOrder>,
}

impl PageOptions {
    /// Render as ordered query pairs.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(order) = self.sort_order {
            params.push(("sort_order".to_string(), order.as_str().to_string()));
        }
        params
    }
}
