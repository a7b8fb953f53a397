//! Configuration module for Hestia.

mod app_config;
mod helpers;
mod http;
mod request_loader;

pub use app_config::AppConfig;
pub use helpers::{deserialize_duration_from_ms, deserialize_duration_from_seconds};
pub use http::{HttpClientConfig, HttpRetryConfig, JitterSetting};
pub use request_loader::{RequestLoader, RequestLoaderError};
