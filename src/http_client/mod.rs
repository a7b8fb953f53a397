//! Construction of the HTTP client used to reach the listing API.
//!
//! The client is a plain `reqwest` client wrapped in retry middleware. With
//! the default configuration the middleware is inert (zero retries), so each
//! invocation performs exactly one GET and any failure aborts the run;
//! operators can opt into retries through `http_retry` in `app.yaml`.

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{Jitter, RetryTransientMiddleware, policies::ExponentialBackoff};
use thiserror::Error;

use crate::config::{HttpClientConfig, HttpRetryConfig, JitterSetting};

/// Errors that can occur while building the HTTP client.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// The underlying `reqwest::Client` could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Builds the retry-capable HTTP client for listing requests.
pub fn build_http_client(
    client_config: &HttpClientConfig,
    retry_config: &HttpRetryConfig,
) -> Result<ClientWithMiddleware, HttpClientError> {
    let base_client = reqwest::Client::builder()
        .pool_max_idle_per_host(client_config.max_idle_per_host)
        .pool_idle_timeout(Some(client_config.idle_timeout))
        .connect_timeout(client_config.connect_timeout)
        .build()?;

    let policy_builder = match retry_config.jitter {
        JitterSetting::None => ExponentialBackoff::builder().jitter(Jitter::None),
        JitterSetting::Full => ExponentialBackoff::builder().jitter(Jitter::Full),
    };

    let retry_policy = policy_builder
        .base(retry_config.backoff_base)
        .retry_bounds(retry_config.initial_backoff_ms, retry_config.max_backoff_secs)
        .build_with_max_retries(retry_config.max_retries);

    Ok(ClientBuilder::new(base_client)
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build())
}
