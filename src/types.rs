//! Core types for timeline-dl

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default maximum number of tweets accepted per task
pub const DEFAULT_TWEETS_LIMIT: usize = 80;

/// Immutable specification of one timeline retrieval task
///
/// If [`until`](Self::until) is set, [`tweets_limit`](Self::tweets_limit) is
/// ignored: retrieval stops at the first tweet created at or before `until`.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use timeline_dl::UserTweetsTask;
///
/// let task = UserTweetsTask::new("44196397")
///     .with_until(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
/// assert_eq!(task.user_id, "44196397");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTweetsTask {
    /// Numeric identifier of the target user
    pub user_id: String,

    /// Lower time bound; tweets created at or before this instant stop the run
    pub until: Option<DateTime<Utc>>,

    /// Maximum number of tweets to accept (default: 80); ignored when `until` is set
    pub tweets_limit: usize,
}

impl UserTweetsTask {
    /// Create a task for the given user with the default tweet limit
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            until: None,
            tweets_limit: DEFAULT_TWEETS_LIMIT,
        }
    }

    /// Stop at the first tweet created at or before `until`
    pub fn with_until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }

    /// Cap the total number of accepted tweets
    pub fn with_tweets_limit(mut self, tweets_limit: usize) -> Self {
        self.tweets_limit = tweets_limit;
        self
    }
}

/// Position of a pagination cursor within a timeline page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorKind {
    /// Cursor pointing above the newest entry of the page
    Top,
    /// Cursor pointing below the oldest entry of the page
    Bottom,
    /// Any other cursor kind the API may introduce
    #[serde(other)]
    Other,
}

/// Opaque pagination continuation token returned by the timeline API
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Where in the page this cursor points
    pub kind: CursorKind,
    /// Opaque token passed back to the API to continue from this position
    pub value: String,
}

/// One retrieved tweet, kept as its raw serialized API payload
///
/// The payload is treated as opaque except for `legacy.created_at`, which the
/// stop-condition filter reads in until-mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTweet {
    /// Serialized `tweet_results.result` payload, verbatim
    pub raw_json: String,

    /// Local wall-clock time at which the tweet was retrieved
    pub fetched_at: DateTime<Utc>,
}

impl RawTweet {
    /// Wrap a serialized tweet payload, stamping the current retrieval time
    pub fn new(raw_json: String) -> Self {
        Self {
            raw_json,
            fetched_at: Utc::now(),
        }
    }
}

/// Final outcome of one timeline retrieval run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTweetsResult {
    /// Total number of tweets accepted across the whole run
    pub tweets_count: usize,
}
