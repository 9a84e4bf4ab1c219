//! Per-run pagination state.

use crate::types::Cursor;

/// Mutable session state for one timeline retrieval run
///
/// Created fresh when a run starts and owned exclusively by its runner;
/// state is not meaningful across runs and must never be shared between
/// concurrent ones.
#[derive(Clone, Debug, Default)]
pub struct UserTweetsContext {
    /// Continuation token for the next page, if any
    pub cursor: Option<Cursor>,

    /// Total tweets accepted so far; never decreases
    pub all_tweets_count: usize,

    /// Terminal flag; once set it is never cleared
    pub stop: bool,

    /// Number of requests sent so far
    pub requests_count: usize,
}

impl UserTweetsContext {
    /// Fresh state for a new run
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed request and the number of tweets it contributed
    pub fn record_request(&mut self, accepted: usize) {
        self.requests_count += 1;
        self.all_tweets_count += accepted;
    }
}
