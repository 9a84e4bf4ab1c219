//! The pagination loop.
//!
//! Each iteration builds a request from the current context, sends it through
//! the injected transport, and routes the response through the not-found
//! short-circuit or the parse, filter, accept, dispatch pipeline. The loop
//! ends when the context's stop flag is set, or when at least one request has
//! been sent and no cursor remains (the platform's implicit end-of-feed
//! signal).

use tracing::{debug, info};

use super::UserTweetsRunner;
use super::filter::filter_batch;
use super::parser::{TimelineEntry, is_not_found_response, parse_timeline_entries};
use crate::error::{Error, Result};
use crate::types::{RawTweet, UserTweetsResult};

impl UserTweetsRunner {
    /// Retrieve pages until a stopping condition is reached
    ///
    /// Returns the total number of accepted tweets. Any transport, parse, or
    /// sink failure aborts the run; tweets already dispatched to sinks before
    /// the failure remain delivered.
    pub async fn run(&mut self) -> Result<UserTweetsResult> {
        info!(user_id = %self.task.user_id, "starting user timeline run");
        while !self.is_finished() {
            self.execute_next_request().await?;
        }
        info!(
            user_id = %self.task.user_id,
            tweets = self.context.all_tweets_count,
            requests = self.context.requests_count,
            "user timeline run finished"
        );
        Ok(UserTweetsResult {
            tweets_count: self.context.all_tweets_count,
        })
    }

    fn is_finished(&self) -> bool {
        if self.context.stop {
            return true;
        }
        // No explicit stop: a missing cursor after at least one request means
        // the feed signalled its end implicitly.
        self.context.requests_count > 0 && self.context.cursor.is_none()
    }

    async fn execute_next_request(&mut self) -> Result<()> {
        let request = self
            .requests
            .user_tweets_request(&self.task.user_id, self.context.cursor.as_ref())?;
        let response = self.web_client.run_request(request).await?;
        if !response.is_success() {
            return Err(Error::BadResponse {
                status: response.status,
                body: response.body,
            });
        }

        if is_not_found_response(&response.body)? {
            debug!(user_id = %self.task.user_id, "user or content not found, ending run");
            self.context.record_request(0);
            self.context.cursor = None;
            return Ok(());
        }

        let mut cursors = Vec::new();
        let mut tweets = Vec::new();
        for entry in parse_timeline_entries(&response.body)? {
            match entry {
                TimelineEntry::Cursor(cursor) => cursors.push(cursor),
                TimelineEntry::Tweet(tweet) => tweets.push(tweet),
            }
        }
        // Pages carry a top and a bottom cursor; only the second one can
        // advance the feed.
        let next_cursor = cursors.into_iter().nth(1);

        let accepted = filter_batch(&self.task, &mut self.context, tweets)?;
        debug!(
            accepted = accepted.len(),
            stop = self.context.stop,
            has_cursor = next_cursor.is_some(),
            "processed timeline page"
        );
        self.context.record_request(accepted.len());
        self.context.cursor = next_cursor;

        self.dispatch(&accepted).await
    }

    async fn dispatch(&self, batch: &[RawTweet]) -> Result<()> {
        for output in &self.outputs {
            output.export_raw_data(batch).await?;
        }
        Ok(())
    }
}
