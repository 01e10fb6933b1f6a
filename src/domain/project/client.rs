//! Projects sub-client — listing, retrieval, lifecycle actions.

use crate::client::XrplSaleClient;
use crate::domain::project::wire::{CreateProjectRequest, Project, ProjectsResponse};
use crate::domain::project::ListProjectsOptions;
use crate::error::SdkError;

/// Sub-client for project operations.
pub struct Projects<'a> {
    pub(crate) client: &'a XrplSaleClient,
}

impl<'a> Projects<'a> {
    /// List projects, optionally filtered by status and paginated.
    pub async fn list(&self, options: ListProjectsOptions) -> Result<ProjectsResponse, SdkError> {
        Ok(self
            .client
            .http
            .get("/projects", options.to_query())
            .await?)
    }

    /// Get a project by id.
    pub async fn get(&self, id: &str) -> Result<Project, SdkError> {
        Ok(self.client.http.get(&Self::path(id, None), Vec::new()).await?)
    }

    /// Create a draft project.
    pub async fn create(&self, request: &CreateProjectRequest) -> Result<Project, SdkError> {
        Ok(self.client.http.post("/projects", request).await?)
    }

    /// Open the sale: draft/upcoming → active.
    pub async fn launch(&self, id: &str) -> Result<Project, SdkError> {
        self.action(id, "launch").await
    }

    /// Temporarily halt an active sale.
    pub async fn pause(&self, id: &str) -> Result<Project, SdkError> {
        self.action(id, "pause").await
    }

    /// Resume a paused sale.
    pub async fn resume(&self, id: &str) -> Result<Project, SdkError> {
        self.action(id, "resume").await
    }

    /// Cancel the sale permanently.
    pub async fn cancel(&self, id: &str) -> Result<Project, SdkError> {
        self.action(id, "cancel").await
    }

    /// Lifecycle actions POST to `/projects/{id}/{action}` and return the
    /// updated project — these endpoints never have empty success bodies.
    async fn action(&self, id: &str, action: &str) -> Result<Project, SdkError> {
        Ok(self
            .client
            .http
            .post(&Self::path(id, Some(action)), &serde_json::json!({}))
            .await?)
    }

    fn path(id: &str, action: Option<&str>) -> String {
        let base = format!("/projects/{}", urlencoding::encode(id));
        match action {
            Some(action) => format!("{base}/{action}"),
            None => base,
        }
    }
}
