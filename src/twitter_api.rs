//! Request builder for the Twitter/X GraphQL timeline API
//!
//! Builds transport-ready [`RequestDetails`] for the `UserTweets` endpoint.
//! Only caller-supplied credentials are attached; the library performs no
//! token negotiation of its own.

use serde_json::json;
use url::Url;

use crate::config::ApiConfig;
use crate::error::Result;
use crate::http::RequestDetails;
use crate::types::Cursor;

/// GraphQL query identifier of the `UserTweets` operation
const USER_TWEETS_QUERY_ID: &str = "HuTx74BxAnezK1gWvYY7zg";

/// Builder for user-timeline requests
#[derive(Clone, Debug)]
pub struct TimelineApiRequests {
    config: ApiConfig,
}

impl TimelineApiRequests {
    /// Create a builder with the given API configuration
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Build the request for one page of a user's timeline
    ///
    /// `cursor` is the continuation token from the previous page; `None`
    /// requests the newest page.
    pub fn user_tweets_request(
        &self,
        user_id: &str,
        cursor: Option<&Cursor>,
    ) -> Result<RequestDetails> {
        let mut variables = json!({
            "userId": user_id,
            "count": self.config.page_size,
            "includePromotedContent": false,
            "withQuickPromoteEligibilityTweetFieldsEnabled": false,
            "withVoice": true,
            "withV2Timeline": true,
        });
        if let Some(cursor) = cursor {
            variables["cursor"] = json!(cursor.value);
        }

        let mut url = Url::parse(&format!(
            "{}/{}/UserTweets",
            self.config.base_url.trim_end_matches('/'),
            USER_TWEETS_QUERY_ID
        ))?;
        url.query_pairs_mut()
            .append_pair("variables", &variables.to_string())
            .append_pair("features", &features().to_string());

        let mut headers = Vec::new();
        if let Some(bearer) = &self.config.bearer_token {
            headers.push(("authorization".to_string(), format!("Bearer {bearer}")));
        }
        if let Some(guest) = &self.config.guest_token {
            headers.push(("x-guest-token".to_string(), guest.clone()));
        }
        for (name, value) in &self.config.extra_headers {
            headers.push((name.clone(), value.clone()));
        }

        Ok(RequestDetails { url, headers })
    }
}

/// Feature flags the GraphQL endpoint requires on every request
fn features() -> serde_json::Value {
    json!({
        "responsive_web_graphql_exclude_directive_enabled": true,
        "verified_phone_label_enabled": false,
        "creator_subscriptions_tweet_preview_api_enabled": true,
        "responsive_web_graphql_timeline_navigation_enabled": true,
        "responsive_web_graphql_skip_user_profile_image_extensions_enabled": false,
        "tweetypie_unmention_optimization_enabled": true,
        "responsive_web_edit_tweet_api_enabled": true,
        "graphql_is_translatable_rweb_tweet_is_translatable_enabled": true,
        "view_counts_everywhere_api_enabled": true,
        "longform_notetweets_consumption_enabled": true,
        "tweet_awards_web_tipping_enabled": false,
        "freedom_of_speech_not_reach_fetch_enabled": true,
        "standardized_nudges_misinfo": true,
        "tweet_with_visibility_results_prefer_gql_limited_actions_policy_enabled": true,
        "longform_notetweets_rich_text_read_enabled": true,
        "longform_notetweets_inline_media_enabled": true,
        "responsive_web_media_download_video_enabled": false,
        "responsive_web_enhance_cards_enabled": false,
    })
}
