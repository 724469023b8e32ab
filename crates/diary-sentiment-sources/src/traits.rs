use crate::error::FetchError;
use async_trait::async_trait;
use diary_sentiment_models::DiaryEntry;

/// Anything that can produce the diary entries of a user
#[async_trait]
pub trait DiarySource: Send + Sync {
    fn source_name(&self) -> &str;

    /// Entries in feed order. Entries of every type are returned; filtering
    /// to reviewed diary entries is the pipeline's job.
    async fn fetch_diary(&self, username: &str) -> Result<Vec<DiaryEntry>, FetchError>;
}
