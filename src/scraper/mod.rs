//! Core timeline retrieval state machine, split into focused submodules.
//!
//! The [`UserTweetsRunner`] struct and its supporting pieces are organized by
//! concern:
//! - [`context`] - per-run pagination state
//! - [`parser`] - decoding one page into cursors and raw tweets
//! - [`filter`] - stop-condition filtering (until-mode / limit-mode)
//! - [`runner`] - the request/parse/filter/dispatch loop
//!
//! Retrieval is strictly sequential: cursor advancement depends on the prior
//! page's result, so there is exactly one outstanding request at a time and
//! no prefetching.

mod context;
mod filter;
mod parser;
mod runner;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;

pub use context::UserTweetsContext;

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::http::{ReqwestWebClient, WebClient};
use crate::output::RawDataOutput;
use crate::twitter_api::TimelineApiRequests;
use crate::types::UserTweetsTask;

/// Retrieves one user's timeline page by page and fans accepted tweets out to
/// the registered outputs
///
/// A runner drives exactly one run; its context starts fresh and is not
/// reusable afterwards. Outputs may be shared across runners if they are safe
/// for that usage.
pub struct UserTweetsRunner {
    pub(crate) task: UserTweetsTask,
    pub(crate) context: UserTweetsContext,
    pub(crate) outputs: Vec<Box<dyn RawDataOutput>>,
    pub(crate) web_client: Arc<dyn WebClient>,
    pub(crate) requests: TimelineApiRequests,
}

impl UserTweetsRunner {
    /// Create a runner with an injected transport and request builder
    pub fn new(
        task: UserTweetsTask,
        outputs: Vec<Box<dyn RawDataOutput>>,
        web_client: Arc<dyn WebClient>,
        requests: TimelineApiRequests,
    ) -> Self {
        Self {
            task,
            context: UserTweetsContext::new(),
            outputs,
            web_client,
            requests,
        }
    }

    /// Create a runner using the default reqwest transport built from `config`
    pub fn from_config(
        task: UserTweetsTask,
        outputs: Vec<Box<dyn RawDataOutput>>,
        config: &Config,
    ) -> Result<Self> {
        let web_client = Arc::new(ReqwestWebClient::new(config)?);
        let requests = TimelineApiRequests::new(config.api.clone());
        Ok(Self::new(task, outputs, web_client, requests))
    }

    /// Current pagination state (cursor, counts, stop flag)
    pub fn context(&self) -> &UserTweetsContext {
        &self.context
    }
}
