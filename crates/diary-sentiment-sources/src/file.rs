use crate::error::FetchError;
use crate::feed::decode_entries;
use crate::traits::DiarySource;
use async_trait::async_trait;
use diary_sentiment_models::DiaryEntry;
use std::path::{Path, PathBuf};
use tracing::info;

/// Diary entries saved as a JSON array on disk, in the same shape the feed
/// service returns. Serves every username with the same entries.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DiarySource for FileSource {
    fn source_name(&self) -> &str {
        "file"
    }

    async fn fetch_diary(&self, _username: &str) -> Result<Vec<DiaryEntry>, FetchError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FetchError::Io {
                path: self.path.clone(),
                source,
            })?;

        let entries = decode_entries(&body)?;
        info!(path = %self.path.display(), entries = entries.len(), "Loaded diary from file");
        Ok(entries)
    }
}
