//! Analytics sub-client.

use crate::client::XrplSaleClient;
use crate::domain::analytics::wire::{PlatformSummary, ProjectAnalytics, TrendingProject};
use crate::domain::analytics::Period;
use crate::error::SdkError;

/// Sub-client for analytics queries.
pub struct Analytics<'a> {
    pub(crate) client: &'a XrplSaleClient,
}

impl<'a> Analytics<'a> {
    /// Platform-wide totals.
    pub async fn platform(&self) -> Result<PlatformSummary, SdkError> {
        Ok(self.client.http.get("/analytics/platform", Vec::new()).await?)
    }

    /// Metrics for one project over the given period.
    pub async fn project(
        &self,
        project_id: &str,
        period: Period,
    ) -> Result<ProjectAnalytics, SdkError> {
        let endpoint = format!("/projects/{}/analytics", urlencoding::encode(project_id));
        let query = vec![("period".to_string(), period.as_str().to_string())];
        Ok(self.client.http.get(&endpoint, query).await?)
    }

    /// Projects ranked by recent momentum.
    pub async fn trending(
        &self,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<TrendingProject>, SdkError> {
        let mut query = vec![("period".to_string(), period.as_str().to_string())];
        if let Some(limit) = limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        Ok(self.client.http.get("/analytics/trending", query).await?)
    }
}
