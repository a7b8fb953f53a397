//! This module defines the interface for fetching listing data.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Custom error type for listing data sources.
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// The request URL could not be assembled.
    #[error("Failed to build request URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Transport-level failure (connect, TLS, middleware).
    #[error("Listing request failed: {0}")]
    Request(#[from] reqwest_middleware::Error),

    /// The API answered with a non-success status.
    #[error("Listing API returned status {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    /// The response body could not be decoded as JSON.
    #[error("Failed to decode listing response: {0}")]
    Decode(#[from] reqwest::Error),
}

/// A source of listing data.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ListingDataSource: Send + Sync {
    /// Fetches the raw Property record for `property_id` as parsed JSON.
    async fn fetch_listing(&self, property_id: &str)
    -> Result<serde_json::Value, DataSourceError>;
}
