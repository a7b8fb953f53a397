//! Tuning for the HTTP client that reaches the listing API.

use std::time::Duration;

use serde::Deserialize;

use super::helpers::{deserialize_duration_from_ms, deserialize_duration_from_seconds};

fn default_max_retries() -> u32 {
    // The fetch contract is single-shot: one GET per invocation, failures
    // abort the run. Retries are strictly opt-in.
    0
}

fn default_backoff_base() -> u32 {
    2
}

fn default_initial_backoff() -> Duration {
    Duration::from_millis(250)
}

fn default_max_backoff() -> Duration {
    Duration::from_secs(10)
}

fn default_max_idle_per_host() -> usize {
    10
}

fn default_idle_timeout() -> Duration {
    Duration::from_secs(90)
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(10)
}

/// Jitter applied to retry backoff durations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JitterSetting {
    /// No jitter; backoff durations are exact.
    None,
    /// Full jitter; each backoff duration is randomized.
    #[default]
    Full,
}

/// Retry policy for listing requests.
///
/// Defaults to zero retries so each invocation performs exactly one GET;
/// the external execution harness owns retry policy otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpRetryConfig {
    /// Maximum number of retries after the initial attempt.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base for the exponential backoff calculation.
    #[serde(default = "default_backoff_base")]
    pub backoff_base: u32,

    /// Backoff before the first retry, in milliseconds.
    #[serde(default = "default_initial_backoff", deserialize_with = "deserialize_duration_from_ms")]
    pub initial_backoff_ms: Duration,

    /// Upper bound on any single backoff, in seconds.
    #[serde(
        default = "default_max_backoff",
        deserialize_with = "deserialize_duration_from_seconds"
    )]
    pub max_backoff_secs: Duration,

    /// Jitter applied to backoff durations.
    #[serde(default)]
    pub jitter: JitterSetting,
}

impl Default for HttpRetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            backoff_base: default_backoff_base(),
            initial_backoff_ms: default_initial_backoff(),
            max_backoff_secs: default_max_backoff(),
            jitter: JitterSetting::default(),
        }
    }
}

/// Tuning for the underlying `reqwest` client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpClientConfig {
    /// Maximum idle connections kept per host.
    #[serde(default = "default_max_idle_per_host")]
    pub max_idle_per_host: usize,

    /// How long an idle connection is kept, in seconds.
    #[serde(default = "default_idle_timeout", deserialize_with = "deserialize_duration_from_seconds")]
    pub idle_timeout: Duration,

    /// Connect timeout, in seconds.
    #[serde(
        default = "default_connect_timeout",
        deserialize_with = "deserialize_duration_from_seconds"
    )]
    pub connect_timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: default_max_idle_per_host(),
            idle_timeout: default_idle_timeout(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_defaults_are_single_shot() {
        let config = HttpRetryConfig::default();
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.jitter, JitterSetting::Full);
        assert_eq!(config.initial_backoff_ms, Duration::from_millis(250));
        assert_eq!(config.max_backoff_secs, Duration::from_secs(10));
    }

    #[test]
    fn test_client_defaults() {
        let config = HttpClientConfig::default();
        assert_eq!(config.max_idle_per_host, 10);
        assert_eq!(config.idle_timeout, Duration::from_secs(90));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }
}
