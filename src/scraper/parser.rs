//! Timeline page parsing.
//!
//! One page of the `UserTweets` response decodes into a flat sequence of
//! [`TimelineEntry`] values: pagination cursors and raw tweets, in the order
//! the API listed them. The decode is strict about the keys it relies on;
//! a page that fails to match the expected shape is an error, because it
//! means the API contract changed underneath us. Unrecognized entry and item
//! *kinds* (ads, separators, prompts) simply contribute nothing.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{Cursor, CursorKind, RawTweet};

/// One parsed unit of a timeline page
#[derive(Clone, Debug)]
pub(crate) enum TimelineEntry {
    /// A pagination cursor
    Cursor(Cursor),
    /// A tweet, kept as its raw serialized payload
    Tweet(RawTweet),
}

#[derive(Deserialize)]
struct TimelineResponse {
    data: ResponseData,
}

#[derive(Deserialize)]
struct ResponseData {
    user: UserEnvelope,
}

#[derive(Deserialize)]
struct UserEnvelope {
    result: UserResult,
}

#[derive(Deserialize)]
struct UserResult {
    timeline_v2: TimelineV2,
}

#[derive(Deserialize)]
struct TimelineV2 {
    timeline: Timeline,
}

#[derive(Deserialize)]
struct Timeline {
    instructions: Vec<Instruction>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Instruction {
    TimelineAddEntries { entries: Vec<EntryEnvelope> },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct EntryEnvelope {
    content: EntryContent,
}

#[derive(Deserialize)]
#[serde(tag = "entryType")]
enum EntryContent {
    TimelineTimelineCursor {
        #[serde(rename = "cursorType")]
        cursor_type: CursorKind,
        value: String,
    },
    TimelineTimelineItem {
        #[serde(rename = "itemContent")]
        item_content: ItemContent,
    },
    TimelineTimelineModule {
        items: Vec<ModuleEntry>,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
#[serde(tag = "itemType")]
enum ItemContent {
    TimelineTweet {
        #[serde(rename = "tweet_results")]
        tweet_results: TweetResults,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct TweetResults {
    result: serde_json::Value,
}

#[derive(Deserialize)]
struct ModuleEntry {
    item: ModuleItem,
}

#[derive(Deserialize)]
struct ModuleItem {
    #[serde(rename = "itemContent")]
    item_content: ItemContent,
}

/// Decode one page body into cursors and raw tweets
///
/// A page without a `TimelineAddEntries` instruction is a page with no new
/// content, not an error.
pub(crate) fn parse_timeline_entries(body: &str) -> Result<Vec<TimelineEntry>> {
    let response: TimelineResponse = serde_json::from_str(body)?;
    let entries = response
        .data
        .user
        .result
        .timeline_v2
        .timeline
        .instructions
        .into_iter()
        .find_map(|instruction| match instruction {
            Instruction::TimelineAddEntries { entries } => Some(entries),
            Instruction::Other => None,
        })
        .unwrap_or_default();

    let mut parsed = Vec::new();
    for envelope in entries {
        match envelope.content {
            EntryContent::TimelineTimelineCursor { cursor_type, value } => {
                parsed.push(TimelineEntry::Cursor(Cursor {
                    kind: cursor_type,
                    value,
                }));
            }
            EntryContent::TimelineTimelineItem { item_content } => {
                if let Some(tweet) = tweet_from_item(item_content)? {
                    parsed.push(TimelineEntry::Tweet(tweet));
                }
            }
            EntryContent::TimelineTimelineModule { items } => {
                // Grouped modules carry the tweet as their first item; any
                // further items are not inspected.
                let first = items.into_iter().next().ok_or_else(|| {
                    Error::UnexpectedResponse("timeline module entry with no items".to_string())
                })?;
                if let Some(tweet) = tweet_from_item(first.item.item_content)? {
                    parsed.push(TimelineEntry::Tweet(tweet));
                }
            }
            EntryContent::Other => {}
        }
    }
    Ok(parsed)
}

fn tweet_from_item(item_content: ItemContent) -> Result<Option<RawTweet>> {
    match item_content {
        ItemContent::TimelineTweet { tweet_results } => Ok(Some(RawTweet::new(
            serde_json::to_string(&tweet_results.result)?,
        ))),
        ItemContent::Other => Ok(None),
    }
}

#[derive(Deserialize)]
struct NotFoundProbe {
    data: Option<ProbeData>,
}

#[derive(Deserialize)]
struct ProbeData {
    user: Option<serde_json::Value>,
}

/// Whether a response body is the "user/content not found" shape
///
/// Such a body parses as JSON but carries no `data.user`; it is a clean
/// zero-result page, not a parse error. A body that is not JSON at all is
/// still an error.
pub(crate) fn is_not_found_response(body: &str) -> Result<bool> {
    let probe: NotFoundProbe = serde_json::from_str(body)?;
    Ok(match probe.data {
        Some(data) => data.user.is_none(),
        None => true,
    })
}
