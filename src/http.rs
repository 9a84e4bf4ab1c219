//! HTTP transport seam
//!
//! The pagination loop talks to the network through the [`WebClient`] trait
//! so tests and embedders can inject their own transport (scripted responses,
//! proxied clients, recording clients). [`ReqwestWebClient`] is the default
//! implementation.
//!
//! Responsibility split: the transport may retry *transient* failures
//! (connect errors, timeouts) per [`crate::config::RetryConfig`], but any
//! response that arrived is handed back untouched regardless of status.
//! Deciding what a non-success status means is the runner's job.

use async_trait::async_trait;
use url::Url;

use crate::config::Config;
use crate::error::Result;
use crate::retry::request_with_retry;

/// Transport-ready request parameters for one timeline page
#[derive(Clone, Debug)]
pub struct RequestDetails {
    /// Fully-built request URL including query parameters
    pub url: Url,
    /// Headers attached to the request, in insertion order
    pub headers: Vec<(String, String)>,
}

/// Raw response from the timeline endpoint
#[derive(Clone, Debug)]
pub struct RequestResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, decoded as text
    pub body: String,
}

impl RequestResponse {
    /// Whether the status code denotes success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Pluggable HTTP transport
///
/// Implementations must be safe to share across tasks. A `run_request` error
/// means the request never produced a response; rejected requests come back
/// as a [`RequestResponse`] with a non-success status.
#[async_trait]
pub trait WebClient: Send + Sync {
    /// Execute one request and return the raw response
    async fn run_request(&self, request: RequestDetails) -> Result<RequestResponse>;
}

/// Default [`WebClient`] backed by [`reqwest`]
///
/// Applies the configured user agent and per-request timeout, and retries
/// transient connection failures with exponential backoff.
pub struct ReqwestWebClient {
    client: reqwest::Client,
    config: Config,
}

impl ReqwestWebClient {
    /// Build a client from the given configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.transport.user_agent)
            .timeout(config.transport.request_timeout)
            .build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl WebClient for ReqwestWebClient {
    async fn run_request(&self, request: RequestDetails) -> Result<RequestResponse> {
        request_with_retry(&self.config.retry, || {
            let request = request.clone();
            async move {
                let mut builder = self.client.get(request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name, value);
                }
                let response = builder.send().await?;
                let status = response.status().as_u16();
                let body = response.text().await?;
                Ok(RequestResponse { status, body })
            }
        })
        .await
    }
}
