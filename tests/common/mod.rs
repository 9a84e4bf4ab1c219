//! Shared builders for integration tests: timeline page JSON in the shape the
//! GraphQL endpoint returns.

use serde_json::{Value, json};

pub fn tweet_entry(id: u64, created_at: &str) -> Value {
    json!({
        "entryId": format!("tweet-{id}"),
        "content": {
            "entryType": "TimelineTimelineItem",
            "itemContent": {
                "itemType": "TimelineTweet",
                "tweet_results": {
                    "result": {
                        "rest_id": id.to_string(),
                        "legacy": {
                            "created_at": created_at,
                            "full_text": format!("tweet {id}"),
                        },
                    },
                },
            },
        },
    })
}

pub fn cursor_entry(kind: &str, value: &str) -> Value {
    json!({
        "entryId": format!("cursor-{value}"),
        "content": {
            "entryType": "TimelineTimelineCursor",
            "cursorType": kind,
            "value": value,
        },
    })
}

pub fn page_json(entries: Vec<Value>) -> String {
    json!({
        "data": {
            "user": {
                "result": {
                    "timeline_v2": {
                        "timeline": {
                            "instructions": [
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

/// A page of `count` tweets bracketed by a top/bottom cursor pair
pub fn tweet_page(first_id: u64, count: u64, created_at: &str, bottom_cursor: &str) -> String {
    let mut entries = vec![cursor_entry("Top", "cursor-top")];
    for id in first_id..first_id + count {
        entries.push(tweet_entry(id, created_at));
    }
    entries.push(cursor_entry("Bottom", bottom_cursor));
    page_json(entries)
}
