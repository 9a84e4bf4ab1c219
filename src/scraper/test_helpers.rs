//! Shared helpers for scraper unit tests: page JSON builders, a scripted
//! transport, and recording/failing outputs.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use crate::error::{Error, Result};
use crate::http::{RequestDetails, RequestResponse, WebClient};
use crate::output::RawDataOutput;
use crate::types::RawTweet;

/// Render a timestamp in the API's `legacy.created_at` layout
pub(crate) fn format_created_at(instant: &DateTime<Utc>) -> String {
    instant.format("%a %b %d %H:%M:%S %z %Y").to_string()
}

/// Tweet result payload as the API nests it under `tweet_results.result`
pub(crate) fn tweet_result(id: u64, created_at: &str) -> Value {
    json!({
        "rest_id": id.to_string(),
        "legacy": {
            "created_at": created_at,
            "full_text": format!("tweet {id}"),
        },
    })
}

/// A `TimelineTimelineItem` entry wrapping one tweet
pub(crate) fn tweet_entry(id: u64, created_at: &str) -> Value {
    json!({
        "entryId": format!("tweet-{id}"),
        "content": {
            "entryType": "TimelineTimelineItem",
            "itemContent": {
                "itemType": "TimelineTweet",
                "tweet_results": { "result": tweet_result(id, created_at) },
            },
        },
    })
}

/// A `TimelineTimelineCursor` entry
pub(crate) fn cursor_entry(kind: &str, value: &str) -> Value {
    json!({
        "entryId": format!("cursor-{}", value),
        "content": {
            "entryType": "TimelineTimelineCursor",
            "cursorType": kind,
            "value": value,
        },
    })
}

/// A `TimelineTimelineModule` entry whose items each wrap one tweet
pub(crate) fn module_entry(ids: &[u64], created_at: &str) -> Value {
    let items: Vec<Value> = ids
        .iter()
        .map(|id| {
            json!({
                "item": {
                    "itemContent": {
                        "itemType": "TimelineTweet",
                        "tweet_results": { "result": tweet_result(*id, created_at) },
                    },
                },
            })
        })
        .collect();
    json!({
        "entryId": "module-0",
        "content": {
            "entryType": "TimelineTimelineModule",
            "items": items,
        },
    })
}

/// Full response body for one page holding the given entries
pub(crate) fn page_json(entries: Vec<Value>) -> String {
    json!({
        "data": {
            "user": {
                "result": {
                    "timeline_v2": {
                        "timeline": {
                            "instructions": [
                                { "type": "TimelineClearCache" },
                                { "type": "TimelineAddEntries", "entries": entries },
                            ],
                        },
                    },
                },
            },
        },
    })
    .to_string()
}

/// A 200 response carrying the given body
pub(crate) fn ok_response(body: String) -> RequestResponse {
    RequestResponse { status: 200, body }
}

/// A raw tweet whose payload carries only `legacy.created_at`
pub(crate) fn raw_tweet_created(created_at: &str) -> RawTweet {
    RawTweet::new(json!({ "legacy": { "created_at": created_at } }).to_string())
}

/// The `cursor` field of a request's `variables` query parameter, if any
pub(crate) fn request_cursor(details: &RequestDetails) -> Option<String> {
    let variables = details
        .url
        .query_pairs()
        .find(|(name, _)| name == "variables")
        .map(|(_, value)| value.into_owned())?;
    let value: Value = serde_json::from_str(&variables).ok()?;
    value
        .get("cursor")
        .and_then(|cursor| cursor.as_str())
        .map(str::to_string)
}

/// Transport that replays a scripted sequence of responses and records every
/// request it was asked to send
pub(crate) struct ScriptedWebClient {
    responses: Mutex<VecDeque<RequestResponse>>,
    requests: Mutex<Vec<RequestDetails>>,
}

impl ScriptedWebClient {
    pub(crate) fn new(responses: Vec<RequestResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests_sent(&self) -> Vec<RequestDetails> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebClient for ScriptedWebClient {
    async fn run_request(&self, request: RequestDetails) -> Result<RequestResponse> {
        self.requests.lock().unwrap().push(request);
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted client ran out of responses"))
    }
}

/// Output that records the size of every exported batch
#[derive(Clone, Default)]
pub(crate) struct BatchSizesOutput {
    sizes: Arc<Mutex<Vec<usize>>>,
}

impl BatchSizesOutput {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn sizes(&self) -> Vec<usize> {
        self.sizes.lock().unwrap().clone()
    }
}

#[async_trait]
impl RawDataOutput for BatchSizesOutput {
    async fn export_raw_data(&self, batch: &[RawTweet]) -> Result<()> {
        self.sizes.lock().unwrap().push(batch.len());
        Ok(())
    }
}

/// Output that fails every export
pub(crate) struct FailingOutput;

#[async_trait]
impl RawDataOutput for FailingOutput {
    async fn export_raw_data(&self, _batch: &[RawTweet]) -> Result<()> {
        Err(Error::Output("scripted sink failure".to_string()))
    }
}
