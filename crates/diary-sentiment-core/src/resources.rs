use crate::error::ResourceError;
use crate::lexicon::Lexicon;
use crate::sentiment::{LexiconScorer, SentimentScorer};
use crate::stopwords::StopWordList;
use diary_sentiment_config::AnalysisConfig;
use std::sync::Arc;
use tracing::info;

/// Stop-word list and scorer, loaded once at startup and shared read-only
/// by every pipeline run.
#[derive(Clone)]
pub struct AnalysisResources {
    pub stop_words: Arc<StopWordList>,
    pub scorer: Arc<dyn SentimentScorer>,
}

impl AnalysisResources {
    pub fn new(stop_words: Arc<StopWordList>, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { stop_words, scorer }
    }

    /// Bundled common-word list and lexicon, negation off
    pub fn bundled() -> Result<Self, ResourceError> {
        let stop_words = StopWordList::bundled()?;
        let lexicon = Lexicon::bundled()?;
        Ok(Self::new(
            Arc::new(stop_words),
            Arc::new(LexiconScorer::new(Arc::new(lexicon))),
        ))
    }

    /// Load resources named by the configuration, falling back to the
    /// bundled copies for anything not overridden
    pub fn from_config(config: &AnalysisConfig) -> Result<Self, ResourceError> {
        let stop_words = match config.stop_words_file {
            Some(ref path) => StopWordList::from_path(path)?,
            None => StopWordList::bundled()?,
        };
        let lexicon = match config.lexicon_file {
            Some(ref path) => Lexicon::from_path(path)?,
            None => Lexicon::bundled()?,
        };

        info!(
            stop_words = stop_words.len(),
            lexicon_words = lexicon.len(),
            negation = config.negation,
            "Analysis resources loaded"
        );

        let scorer = LexiconScorer::new(Arc::new(lexicon)).with_negation(config.negation);
        Ok(Self::new(Arc::new(stop_words), Arc::new(scorer)))
    }
}

impl std::fmt::Debug for AnalysisResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisResources")
            .field("stop_words", &self.stop_words.len())
            .field("scorer", &self.scorer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_config_overrides() {
        let mut stop_words = tempfile::NamedTempFile::new().unwrap();
        writeln!(stop_words, "word,rank\nmovie,1").unwrap();
        let mut lexicon = tempfile::NamedTempFile::new().unwrap();
        writeln!(lexicon, "movie\t2").unwrap();

        let config = AnalysisConfig {
            stop_words_file: Some(stop_words.path().to_path_buf()),
            lexicon_file: Some(lexicon.path().to_path_buf()),
            ..AnalysisConfig::default()
        };
        let resources = AnalysisResources::from_config(&config).unwrap();

        assert!(resources.stop_words.is_stop_word("movie"));
        assert!(!resources.stop_words.is_stop_word("the"));
        assert_eq!(resources.scorer.score("movie great").score, 2);
    }

    #[test]
    fn test_from_config_defaults_to_bundled() {
        let resources = AnalysisResources::from_config(&AnalysisConfig::default()).unwrap();
        assert_eq!(resources.stop_words.len(), 100);
        assert_eq!(resources.scorer.score("great").score, 3);
    }

    #[test]
    fn test_from_config_negation() {
        let config = AnalysisConfig {
            negation: true,
            ..AnalysisConfig::default()
        };
        let resources = AnalysisResources::from_config(&config).unwrap();
        assert_eq!(resources.scorer.score("not great").score, -3);
    }
}
