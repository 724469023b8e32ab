use crate::error::FetchError;
use crate::traits::DiarySource;
use async_trait::async_trait;
use diary_sentiment_config::FeedConfig;
use diary_sentiment_models::DiaryEntry;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Body the feed service sends alongside a non-success status
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the JSON diary feed service
#[derive(Clone)]
pub struct FeedClient {
    client: Arc<Client>,
    base_url: String,
}

impl FeedClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("reelfeel/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client: Arc::new(client),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(config.base_url.clone(), Duration::from_secs(config.timeout_seconds))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn feed_url(&self, username: &str) -> String {
        format!("{}/rss?user={}", self.base_url, urlencoding::encode(username))
    }
}

#[async_trait]
impl DiarySource for FeedClient {
    fn source_name(&self) -> &str {
        "feed"
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_diary(&self, username: &str) -> Result<Vec<DiaryEntry>, FetchError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(FetchError::InvalidUsername);
        }

        let url = self.feed_url(username);
        debug!(url = %url, "Requesting diary feed");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = upstream_message(status, &body);
            warn!(status = status.as_u16(), message = %message, "Diary feed request rejected");
            return Err(FetchError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let entries = decode_entries(&body)?;
        info!(entries = entries.len(), "Fetched diary feed");
        Ok(entries)
    }
}

pub(crate) fn decode_entries(body: &str) -> Result<Vec<DiaryEntry>, FetchError> {
    serde_json::from_str(body).map_err(FetchError::Decode)
}

/// The service's own error message, or the status text when the body is not
/// an `{"error": ...}` object
fn upstream_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error }) if !error.trim().is_empty() => error,
        _ => status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.to_string()),
    }
}
