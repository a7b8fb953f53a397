//! Command implementations behind the CLI.

pub mod execute;
pub mod simulate;

use thiserror::Error;

use crate::{
    config::{AppConfig, RequestLoader, RequestLoaderError},
    http_client::{HttpClientError, build_http_client},
    models::RequestConfig,
    pipeline::{Pipeline, PipelineError},
    providers::BridgeDataSource,
};

/// Errors shared by the commands.
#[derive(Debug, Error)]
pub enum CmdError {
    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Application configuration failure.
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    /// Request configuration failure.
    #[error("Request loading error: {0}")]
    RequestLoading(#[from] RequestLoaderError),

    /// HTTP client construction failure.
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] HttpClientError),

    /// Pipeline failure.
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Report serialization failure.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested name is not in the request configuration.
    #[error("No request named {0:?} in the request configuration")]
    UnknownRequest(String),

    /// The request configuration declares no requests at all.
    #[error("Request configuration is empty")]
    NoRequests,
}

/// Loads the request list and injects the environment-supplied wallet key.
fn load_requests(config: &AppConfig) -> Result<Vec<RequestConfig>, CmdError> {
    let loader = RequestLoader::new(config.request_config_path.clone());
    let mut requests = loader.load()?;

    for request in &mut requests {
        request.wallet_private_key = config.wallet_private_key.clone();
    }

    Ok(requests)
}

/// Selects the request to run: by name, or the first one declared.
fn select_request(
    requests: Vec<RequestConfig>,
    name: Option<&str>,
) -> Result<RequestConfig, CmdError> {
    match name {
        Some(name) => requests
            .into_iter()
            .find(|request| request.name == name)
            .ok_or_else(|| CmdError::UnknownRequest(name.to_string())),
        None => requests.into_iter().next().ok_or(CmdError::NoRequests),
    }
}

/// Wires the production pipeline from the application configuration.
fn build_pipeline(config: &AppConfig) -> Result<Pipeline<BridgeDataSource>, CmdError> {
    let client = build_http_client(&config.http_client, &config.http_retry)?;
    let source =
        BridgeDataSource::new(client, config.api_base_url.clone(), config.access_token.clone());

    Ok(Pipeline::new(source, config.property_id.clone()))
}
