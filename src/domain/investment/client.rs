//! Investments sub-client.

use crate::client::XrplSaleClient;
use crate::domain::investment::wire::{
    CreateInvestmentRequest, Investment, InvestmentsResponse,
};
use crate::domain::PageOptions;
use crate::error::SdkError;

/// Sub-client for investment operations.
pub struct Investments<'a> {
    pub(crate) client: &'a XrplSaleClient,
}

impl<'a> Investments<'a> {
    /// Record a new investment intent for a project.
    pub async fn create(
        &self,
        request: &CreateInvestmentRequest,
    ) -> Result<Investment, SdkError> {
        Ok(self.client.http.post("/investments", request).await?)
    }

    /// Get an investment by id.
    pub async fn get(&self, id: &str) -> Result<Investment, SdkError> {
        let endpoint = format!("/investments/{}", urlencoding::encode(id));
        Ok(self.client.http.get(&endpoint, Vec::new()).await?)
    }

    /// List investments in a project.
    pub async fn list_for_project(
        &self,
        project_id: &str,
        options: PageOptions,
    ) -> Result<InvestmentsResponse, SdkError> {
        let endpoint = format!("/projects/{}/investments", urlencoding::encode(project_id));
        Ok(self.client.http.get(&endpoint, options.to_query()).await?)
    }

    /// List investments made by a wallet across all projects.
    pub async fn list_for_investor(
        &self,
        wallet_address: &str,
        options: PageOptions,
    ) -> Result<InvestmentsResponse, SdkError> {
        let endpoint = format!(
            "/investors/{}/investments",
            urlencoding::encode(wallet_address)
        );
        Ok(self.client.http.get(&endpoint, options.to_query()).await?)
    }
}
