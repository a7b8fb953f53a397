//! Application configuration.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

use super::{HttpClientConfig, HttpRetryConfig};

fn default_property_id() -> String {
    // The Bridge test dataset record every sample request points at.
    "P_5dba1fb94aa4055b9f29696f".to_string()
}

/// Application configuration for Hestia.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Base URL of the listing API dataset
    /// (e.g. `https://api.bridgedataoutput.com/api/v2/OData/test`).
    pub api_base_url: Url,

    /// Access token appended to every listing request.
    pub access_token: String,

    /// Identifier of the Property record to fetch.
    #[serde(default = "default_property_id")]
    pub property_id: String,

    /// Path to the request configuration file.
    #[serde(skip_deserializing)]
    pub request_config_path: PathBuf,

    /// Wallet private key used to sign request secrets. Supplied through the
    /// environment (`HESTIA__WALLET_PRIVATE_KEY`); stays `None` when unset,
    /// with no local validation.
    #[serde(default)]
    pub wallet_private_key: Option<String>,

    /// Retry policy for listing requests (zero retries by default).
    #[serde(default)]
    pub http_retry: HttpRetryConfig,

    /// Tuning for the underlying HTTP client.
    #[serde(default)]
    pub http_client: HttpClientConfig,
}

impl AppConfig {
    /// Creates a new `AppConfig` by reading from the configuration directory.
    pub fn new(config_dir: Option<&str>) -> Result<Self, ConfigError> {
        let config_dir_str = config_dir.unwrap_or("configs");
        let s = Config::builder()
            .add_source(File::with_name(&format!("{config_dir_str}/app.yaml")))
            .add_source(Environment::with_prefix("HESTIA").separator("__"))
            .build()?;
        let mut config: Self = s.try_deserialize()?;

        // The request list lives next to app.yaml.
        config.request_config_path = Path::new(config_dir_str).join("requests.yaml");

        Ok(config)
    }

    /// Creates a new `AppConfigBuilder` for testing purposes.
    #[cfg(test)]
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// A builder for creating `AppConfig` instances for testing.
#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl Default for AppConfigBuilder {
    fn default() -> Self {
        Self {
            config: AppConfig {
                api_base_url: Url::parse("http://localhost:8080/odata/test").unwrap(),
                access_token: "test-token".to_string(),
                property_id: default_property_id(),
                request_config_path: PathBuf::new(),
                wallet_private_key: None,
                http_retry: HttpRetryConfig::default(),
                http_client: HttpClientConfig::default(),
            },
        }
    }
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn api_base_url(mut self, url: &str) -> Self {
        self.config.api_base_url = Url::parse(url).unwrap();
        self
    }

    pub fn access_token(mut self, token: &str) -> Self {
        self.config.access_token = token.to_string();
        self
    }

    pub fn property_id(mut self, id: &str) -> Self {
        self.config.property_id = id.to_string();
        self
    }

    pub fn request_config_path(mut self, path: &str) -> Self {
        self.config.request_config_path = path.into();
        self
    }

    pub fn http_retry(mut self, retry: HttpRetryConfig) -> Self {
        self.config.http_retry = retry;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_app_config_builder() {
        let config = AppConfig::builder()
            .api_base_url("http://localhost:9999/api")
            .access_token("secret")
            .property_id("P_TEST")
            .request_config_path("test_requests.yaml")
            .build();

        assert_eq!(config.api_base_url.as_str(), "http://localhost:9999/api");
        assert_eq!(config.access_token, "secret");
        assert_eq!(config.property_id, "P_TEST");
        assert_eq!(config.request_config_path, PathBuf::from("test_requests.yaml"));
    }

    #[test]
    fn test_app_config_from_file() {
        let config_content = r#"
        api_base_url: "https://api.bridgedataoutput.com/api/v2/OData/test"
        access_token: "6baca547742c6f96a6ff71b138424f21"
        "#;
        let temp_dir = tempfile::tempdir().unwrap();
        let app_yaml_path = temp_dir.path().join("app.yaml");
        std::fs::write(&app_yaml_path, config_content).unwrap();

        let temp_dir_path = temp_dir.path();
        let config = AppConfig::new(Some(temp_dir_path.to_str().unwrap())).unwrap();

        assert_eq!(
            config.api_base_url.as_str(),
            "https://api.bridgedataoutput.com/api/v2/OData/test"
        );
        assert_eq!(config.property_id, "P_5dba1fb94aa4055b9f29696f");
        assert_eq!(config.request_config_path, temp_dir_path.join("requests.yaml"));
        assert_eq!(config.http_retry.max_retries, 0);
    }

    #[test]
    fn test_app_config_from_file_with_http_overrides() {
        let config_content = r#"
        api_base_url: "https://api.bridgedataoutput.com/api/v2/OData/test"
        access_token: "tok"
        http_retry:
          max_retries: 3
          initial_backoff_ms: 100
        http_client:
          max_idle_per_host: 50
          connect_timeout: 20
        "#;
        let temp_dir = tempfile::tempdir().unwrap();
        let app_yaml_path = temp_dir.path().join("app.yaml");
        std::fs::write(&app_yaml_path, config_content).unwrap();

        let config = AppConfig::new(Some(temp_dir.path().to_str().unwrap())).unwrap();

        assert_eq!(config.http_retry.max_retries, 3);
        assert_eq!(config.http_retry.initial_backoff_ms, Duration::from_millis(100));
        assert_eq!(config.http_client.max_idle_per_host, 50);
        assert_eq!(config.http_client.connect_timeout, Duration::from_secs(20));
        assert_eq!(config.http_client.idle_timeout, Duration::from_secs(90));
    }

    #[test]
    fn test_app_config_env_var_override() {
        let config_content = r#"
        api_base_url: "https://api.bridgedataoutput.com/api/v2/OData/test"
        access_token: "from-file"
        "#;
        let temp_dir = tempfile::tempdir().unwrap();
        let app_yaml_path = temp_dir.path().join("app.yaml");
        std::fs::write(&app_yaml_path, config_content).unwrap();

        unsafe {
            std::env::set_var("HESTIA__ACCESS_TOKEN", "from-env");
            std::env::set_var("HESTIA__WALLET_PRIVATE_KEY", "0xabc123");
        }

        let config = AppConfig::new(Some(temp_dir.path().to_str().unwrap())).unwrap();

        assert_eq!(config.access_token, "from-env");
        assert_eq!(config.wallet_private_key.as_deref(), Some("0xabc123"));

        unsafe {
            std::env::remove_var("HESTIA__ACCESS_TOKEN");
            std::env::remove_var("HESTIA__WALLET_PRIVATE_KEY");
        }
    }
}
