//! Stop-condition filtering of freshly parsed tweet batches.

use chrono::{DateTime, Utc};

use super::context::UserTweetsContext;
use crate::error::{Error, Result};
use crate::types::{RawTweet, UserTweetsTask};

/// Layout of `legacy.created_at`, e.g. `Wed Oct 10 20:19:24 +0000 2018`
const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Trim a batch according to the task's stopping condition
///
/// Sets `ctx.stop` when the run should end. An empty batch always stops the
/// run (end of feed). With `until` set, the first tweet created at or before
/// the bound stops the run and everything from that tweet on is dropped.
/// Otherwise the batch is truncated so the total never exceeds
/// `task.tweets_limit`.
pub(crate) fn filter_batch(
    task: &UserTweetsTask,
    ctx: &mut UserTweetsContext,
    batch: Vec<RawTweet>,
) -> Result<Vec<RawTweet>> {
    if batch.is_empty() {
        ctx.stop = true;
        return Ok(batch);
    }

    if let Some(until) = task.until {
        // TODO: created_at is non-increasing within a batch, so this scan
        // could binary search for the boundary instead.
        let mut boundary = None;
        for (idx, tweet) in batch.iter().enumerate() {
            if created_at(tweet)? <= until {
                boundary = Some(idx);
                break;
            }
        }
        if let Some(idx) = boundary {
            ctx.stop = true;
            let mut kept = batch;
            kept.truncate(idx);
            return Ok(kept);
        }
    } else if ctx.all_tweets_count + batch.len() >= task.tweets_limit {
        ctx.stop = true;
        let mut kept = batch;
        kept.truncate(task.tweets_limit - ctx.all_tweets_count);
        return Ok(kept);
    }

    Ok(batch)
}

/// Creation time of a tweet, read from its raw payload
fn created_at(tweet: &RawTweet) -> Result<DateTime<Utc>> {
    let value: serde_json::Value = serde_json::from_str(&tweet.raw_json)?;
    let created = value
        .get("legacy")
        .and_then(|legacy| legacy.get("created_at"))
        .and_then(|created| created.as_str())
        .ok_or_else(|| {
            Error::UnexpectedResponse("tweet payload without legacy.created_at".to_string())
        })?;
    let parsed = DateTime::parse_from_str(created, CREATED_AT_FORMAT).map_err(|e| {
        Error::UnexpectedResponse(format!("unparseable created_at '{created}': {e}"))
    })?;
    Ok(parsed.with_timezone(&Utc))
}
