//! Listing data source backed by the Bridge Data Output OData API.

use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use url::Url;

use super::traits::{DataSourceError, ListingDataSource};

/// A `ListingDataSource` that fetches Property records over HTTP.
pub struct BridgeDataSource {
    client: ClientWithMiddleware,
    api_base_url: Url,
    access_token: String,
}

impl BridgeDataSource {
    /// Creates a new source over the given client and dataset base URL.
    pub fn new(client: ClientWithMiddleware, api_base_url: Url, access_token: String) -> Self {
        Self { client, api_base_url, access_token }
    }

    /// Builds the OData resource URL for a Property record.
    fn property_url(&self, property_id: &str) -> Result<Url, DataSourceError> {
        let base = self.api_base_url.as_str().trim_end_matches('/');
        let url = format!(
            "{base}/Property('{property_id}')?access_token={token}",
            token = self.access_token
        );
        Ok(Url::parse(&url)?)
    }
}

#[async_trait]
impl ListingDataSource for BridgeDataSource {
    #[tracing::instrument(skip(self), level = "debug")]
    async fn fetch_listing(
        &self,
        property_id: &str,
    ) -> Result<serde_json::Value, DataSourceError> {
        let url = self.property_url(property_id)?;

        tracing::debug!(property_id, "Fetching listing record.");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%status, property_id, "Listing API returned an error status.");
            return Err(DataSourceError::UnexpectedStatus(status));
        }

        let body = response.json::<serde_json::Value>().await?;
        tracing::debug!(property_id, "Listing record fetched.");

        Ok(body)
    }
}
