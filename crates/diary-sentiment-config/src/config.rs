use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where diary feeds are fetched from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedConfig {
    #[serde(default = "default_feed_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub newline_mode: NewlineMode,
    /// Word cloud keeps tokens strictly longer than this many characters
    #[serde(default = "default_min_token_length")]
    pub min_token_length: usize,
    /// Keep only the top N words of the ranked word cloud
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_cloud_limit: Option<usize>,
    /// Invert the polarity of a lexicon word directly preceded by a negator
    #[serde(default)]
    pub negation: bool,
    /// CSV of `word,rank` replacing the bundled common-word list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_words_file: Option<PathBuf>,
    /// Tab-separated `word<TAB>polarity` replacing the bundled lexicon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexicon_file: Option<PathBuf>,
}

/// How line breaks inside a review are turned into spaces
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NewlineMode {
    /// Replace only the first line break (legacy feed renderer behavior)
    FirstOnly,
    /// Replace every line break
    #[default]
    All,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

pub fn default_feed_base_url() -> String {
    "https://letterboxd-rss-wrapper.herokuapp.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_min_token_length() -> usize {
    3
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_feed_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            newline_mode: NewlineMode::default(),
            min_token_length: default_min_token_length(),
            word_cloud_limit: None,
            negation: false,
            stop_words_file: None,
            lexicon_file: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let base_url = self.feed.base_url.trim();
        if base_url.is_empty() {
            return Err(anyhow::anyhow!("feed.base_url cannot be empty"));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(anyhow::anyhow!("feed.base_url must be an http(s) URL: {}", base_url));
        }

        if self.feed.timeout_seconds == 0 {
            return Err(anyhow::anyhow!("feed.timeout_seconds must be greater than zero"));
        }

        if self.analysis.word_cloud_limit == Some(0) {
            return Err(anyhow::anyhow!("analysis.word_cloud_limit must be greater than zero when set"));
        }

        if let Some(ref path) = self.analysis.stop_words_file {
            if !path.exists() {
                return Err(anyhow::anyhow!("analysis.stop_words_file does not exist: {}", path.display()));
            }
        }

        if let Some(ref path) = self.analysis.lexicon_file {
            if !path.exists() {
                return Err(anyhow::anyhow!("analysis.lexicon_file does not exist: {}", path.display()));
            }
        }

        Ok(())
    }
}
