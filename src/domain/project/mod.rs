//! Sale projects: lifecycle enums, list options, wire types, sub-client.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use wire::{CreateProjectRequest, Project, ProjectsResponse};

use serde::{Deserialize, Serialize};

use crate::domain::SortOrder;

/// Project lifecycle state. Wire values are snake_case strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Draft,
    Upcoming,
    Active,
    Paused,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Upcoming => "upcoming",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Filters for `GET /projects`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListProjectsOptions {
    pub status: Option<ProjectStatus>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_order: Option<SortOrder>,
}

impl ListProjectsOptions {
    /// Render as ordered query pairs.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(status) = self.status {
            params.push(("status".to_string(), status.as_str().to_string()));
        }
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
