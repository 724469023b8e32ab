use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use crate::review::ReviewKey;
use crate::sentiment::{ReviewSentiment, SentimentResult};
use crate::word_cloud::WordCloudEntry;

/// Everything one analysis run produces for the presentation layer
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub overall_sentiment: SentimentResult,
    pub reviews: Vec<ReviewSentiment>,
    pub word_cloud: Vec<WordCloudEntry>,
}

impl AnalysisReport {
    /// Review keys that occur more than once, in first-seen order.
    ///
    /// Two diary entries for the same film published in the same millisecond
    /// share a key; renderers keyed on it need to disambiguate.
    pub fn duplicate_keys(&self) -> Vec<ReviewKey> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();

        for review_sentiment in &self.reviews {
            let key = review_sentiment.review.key();
            if !seen.insert(key.clone()) && !duplicates.contains(&key) {
                duplicates.push(key);
            }
        }

        duplicates
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}
