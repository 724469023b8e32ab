use diary_sentiment_models::WordCloudEntry;
use std::collections::HashMap;

/// Counts exact-string token occurrences and remembers first-seen order
/// so that equal counts rank deterministically.
#[derive(Debug, Clone, Default)]
pub struct FrequencyAggregator {
    counts: HashMap<String, usize>,
    first_seen: Vec<String>,
}

impl FrequencyAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, token: String) {
        if let Some(count) = self.counts.get_mut(&token) {
            *count += 1;
        } else {
            self.first_seen.push(token.clone());
            self.counts.insert(token, 1);
        }
    }

    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn distinct(&self) -> usize {
        self.first_seen.len()
    }

    /// Token to count mapping, unordered
    pub fn counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    /// Entries by count descending, ties in first-seen order
    pub fn ranked(&self) -> Vec<WordCloudEntry> {
        let mut entries: Vec<WordCloudEntry> = self
            .first_seen
            .iter()
            .map(|token| WordCloudEntry::new(token.clone(), self.counts[token]))
            .collect();
        // Stable sort keeps first-seen order among equal counts
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}

impl Extend<String> for FrequencyAggregator {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for token in iter {
            self.add(token);
        }
    }
}

impl FromIterator<String> for FrequencyAggregator {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut aggregator = Self::new();
        aggregator.extend(iter);
        aggregator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(tokens: &[&str]) -> FrequencyAggregator {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_counts_exact_strings() {
        let aggregator = aggregate(&["movie", "Movie", "movie", "score"]);
        assert_eq!(aggregator.count("movie"), 2);
        assert_eq!(aggregator.count("Movie"), 1);
        assert_eq!(aggregator.count("score"), 1);
        assert_eq!(aggregator.count("missing"), 0);
        assert_eq!(aggregator.distinct(), 3);
        assert_eq!(aggregator.counts().len(), 3);
    }

    #[test]
    fn test_ranked_by_count_then_first_seen() {
        let aggregator = aggregate(&["gamma", "alpha", "beta", "alpha", "delta", "beta", "alpha"]);
        assert_eq!(
            aggregator.ranked(),
            vec![
                WordCloudEntry::new("alpha", 3),
                WordCloudEntry::new("beta", 2),
                WordCloudEntry::new("gamma", 1),
                WordCloudEntry::new("delta", 1),
            ]
        );
    }

    #[test]
    fn test_empty() {
        let aggregator = FrequencyAggregator::new();
        assert!(aggregator.ranked().is_empty());
        assert_eq!(aggregator.distinct(), 0);
    }
}
