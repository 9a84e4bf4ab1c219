//! Configuration types for timeline-dl

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, time::Duration};

/// Top-level configuration
///
/// Works out of the box with `Config::default()` against the public GraphQL
/// endpoint; credentials and headers are supplied by the caller (the library
/// performs no session negotiation of its own).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Timeline API endpoint settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Retry behavior for transient transport failures
    #[serde(default)]
    pub retry: RetryConfig,

    /// Transport-level settings (user agent, timeouts)
    #[serde(default)]
    pub transport: TransportConfig,
}

/// Timeline API endpoint configuration
///
/// Groups settings that shape the outbound UserTweets request.
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    /// GraphQL API base URL (default: "https://twitter.com/i/api/graphql")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token attached as `authorization: Bearer …` when set
    #[serde(default)]
    pub bearer_token: Option<String>,

    /// Guest token attached as `x-guest-token` when set
    #[serde(default)]
    pub guest_token: Option<String>,

    /// Additional headers attached verbatim to every timeline request
    #[serde(default)]
    pub extra_headers: HashMap<String, String>,

    /// Number of tweets requested per page (default: 40)
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            bearer_token: None,
            guest_token: None,
            extra_headers: HashMap::new(),
            page_size: default_page_size(),
        }
    }
}

/// Transport-level configuration
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransportConfig {
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout (default: 30 seconds)
    #[serde(default = "default_request_timeout", with = "duration_serde")]
    pub request_timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            request_timeout: default_request_timeout(),
        }
    }
}

/// Retry configuration for transient transport failures
///
/// Applies only to the transport layer ([`crate::http::ReqwestWebClient`]);
/// the pagination loop itself never retries. Non-success HTTP statuses are
/// not retried at any layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (default: 3)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Initial delay before first retry (default: 1 second)
    #[serde(default = "default_initial_delay", with = "duration_serde")]
    pub initial_delay: Duration,

    /// Maximum delay between retries (default: 60 seconds)
    #[serde(default = "default_max_delay", with = "duration_serde")]
    pub max_delay: Duration,

    /// Multiplier for exponential backoff (default: 2.0)
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,

    /// Add random jitter to delays (default: true)
    #[serde(default = "default_true")]
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

fn default_base_url() -> String {
    "https://twitter.com/i/api/graphql".to_string()
}

fn default_page_size() -> usize {
    40
}

fn default_user_agent() -> String {
    format!("timeline-dl/{}", env!("CARGO_PKG_VERSION"))
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_max_attempts() -> u32 {
    3
}

fn default_initial_delay() -> Duration {
    Duration::from_secs(1)
}

fn default_max_delay() -> Duration {
    Duration::from_secs(60)
}

fn default_backoff_multiplier() -> f64 {
    2.0
}

fn default_true() -> bool {
    true
}

// Duration serialization helper (whole seconds)
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
