use crate::feed::FeedClient;
use crate::file::FileSource;
use crate::traits::DiarySource;
use diary_sentiment_config::Config;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Where the entries for an analysis come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSelection {
    Feed,
    File(PathBuf),
}

/// Build the source for `selection`, taking feed settings from `config`
pub fn create_source(selection: &SourceSelection, config: &Config) -> Arc<dyn DiarySource> {
    match selection {
        SourceSelection::Feed => {
            debug!(base_url = %config.feed.base_url, "Using diary feed source");
            Arc::new(FeedClient::from_config(&config.feed))
        }
        SourceSelection::File(path) => {
            debug!(path = %path.display(), "Using diary file source");
            Arc::new(FileSource::new(path.clone()))
        }
    }
}
