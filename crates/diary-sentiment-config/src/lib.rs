pub mod config;
pub mod paths;

pub use config::{AnalysisConfig, Config, FeedConfig, LoggingConfig, NewlineMode, default_feed_base_url};
pub use paths::{BASE_PATH_ENV, PathManager};
