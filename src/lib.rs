//! # timeline-dl
//!
//! Library for incremental retrieval of Twitter/X user timelines.
//!
//! ## Design Philosophy
//!
//! timeline-dl is designed to be:
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Pluggable** - Transport and output sinks are trait seams you can swap
//! - **Predictable** - One outstanding request at a time; retrieval stops at
//!   a time bound or a count limit, never silently skipping errors
//! - **Sensible defaults** - Works against the public GraphQL endpoint with
//!   caller-supplied credentials and zero further configuration
//!
//! ## Quick Start
//!
//! ```no_run
//! use timeline_dl::{Config, JsonLineFileRawOutput, UserTweetsRunner, UserTweetsTask};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.api.bearer_token = Some("AAAA...".to_string());
//!
//!     let task = UserTweetsTask::new("44196397").with_tweets_limit(200);
//!     let outputs = vec![Box::new(JsonLineFileRawOutput::new("tweets.jsonl")) as _];
//!
//!     let mut runner = UserTweetsRunner::from_config(task, outputs, &config)?;
//!     let result = runner.run().await?;
//!     println!("retrieved {} tweets", result.tweets_count);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// HTTP transport seam and default reqwest client
pub mod http;
/// Output sinks for retrieved tweets
pub mod output;
/// Retry logic with exponential backoff
pub mod retry;
/// Core pagination state machine (decomposed into focused submodules)
pub mod scraper;
/// Request builder for the GraphQL timeline API
pub mod twitter_api;
/// Core types
pub mod types;

// Re-export commonly used types
pub use config::{ApiConfig, Config, RetryConfig, TransportConfig};
pub use error::{Error, Result};
pub use http::{ReqwestWebClient, RequestDetails, RequestResponse, WebClient};
pub use output::{CollectorRawOutput, JsonLineFileRawOutput, PrintRawOutput, RawDataOutput};
pub use scraper::{UserTweetsContext, UserTweetsRunner};
pub use twitter_api::TimelineApiRequests;
pub use types::{
    Cursor, CursorKind, DEFAULT_TWEETS_LIMIT, RawTweet, UserTweetsResult, UserTweetsTask,
};
