//! Error types for timeline-dl
//!
//! This module provides error handling for the library, including:
//! - Transport failures with the failed response carried for diagnostics
//! - Parse failures signalling an upstream API contract change
//! - Output sink failures
//! - Configuration and I/O errors

use thiserror::Error;

/// Result type alias for timeline-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for timeline-dl
///
/// This is the primary error type used throughout the library. Each variant
/// identifies which stage of a run failed.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "api.base_url")
        key: Option<String>,
    },

    /// Network-level error (connection failure, timeout, malformed request)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The timeline endpoint answered with a non-success status
    ///
    /// The run is aborted immediately; the status and body are carried so the
    /// caller can diagnose the rejection (rate limiting, expired credentials,
    /// endpoint changes). The core never retries these.
    #[error("timeline request rejected with status {status}")]
    BadResponse {
        /// HTTP status code of the failed response
        status: u16,
        /// Raw response body, kept verbatim for diagnostics
        body: String,
    },

    /// A response parsed as JSON but did not match the expected timeline shape
    ///
    /// This signals an upstream API contract change and is never skipped
    /// silently.
    #[error("unexpected response shape: {0}")]
    UnexpectedResponse(String),

    /// JSON (de)serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid URL in configuration or request building
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Output sink failed to export a batch
    #[error("output error: {0}")]
    Output(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
