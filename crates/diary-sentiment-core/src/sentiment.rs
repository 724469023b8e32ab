//! Lexicon-based sentiment scoring.
//!
//! The scorer tokenizes independently of the word-cloud tokenizer: it keeps
//! hyphens and apostrophes (the lexicon has entries such as `don't`) and
//! strips its own punctuation set.

use crate::lexicon::Lexicon;
use diary_sentiment_models::SentimentResult;
use std::sync::Arc;

/// Characters the scorer removes before matching against the lexicon
pub const SCORER_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '?', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`', '"', '~', '(', ')',
];

/// Words that flip the polarity of the lexicon word right after them
const NEGATORS: &[&str] = &[
    "not", "no", "never", "non", "cant", "can't", "cannot", "dont", "don't", "doesnt", "doesn't",
    "didnt", "didn't", "isnt", "isn't", "wasnt", "wasn't", "wont", "won't", "aren't", "without",
];

/// Contract every scorer fulfils.
///
/// `normalize_token` is the scorer's own per-word normalization. Anything
/// that tests words against [`SentimentResult`] token sets must go through it.
pub trait SentimentScorer: Send + Sync {
    fn name(&self) -> &str;

    fn normalize_token(&self, word: &str) -> String;

    /// Non-empty normalized tokens of `text`
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|word| self.normalize_token(word))
            .filter(|token| !token.is_empty())
            .collect()
    }

    fn score(&self, text: &str) -> SentimentResult;
}

#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: Arc<Lexicon>,
    negation: bool,
}

impl LexiconScorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon, negation: false }
    }

    /// Invert a hit when the previous token is a negator. Makes the scorer
    /// context-sensitive: scoring a concatenation no longer equals the sum of
    /// scoring its parts.
    pub fn with_negation(mut self, negation: bool) -> Self {
        self.negation = negation;
        self
    }

    pub fn negation(&self) -> bool {
        self.negation
    }
}

impl SentimentScorer for LexiconScorer {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn normalize_token(&self, word: &str) -> String {
        word.chars()
            .filter(|c| !SCORER_PUNCTUATION.contains(c) && !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    }

    fn score(&self, text: &str) -> SentimentResult {
        let tokens = self.tokenize(text);
        let mut result = SentimentResult::default();

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut polarity) = self.lexicon.polarity(token) else {
                continue;
            };

            if self.negation && i > 0 && NEGATORS.contains(&tokens[i - 1].as_str()) {
                polarity = -polarity;
            }

            if polarity > 0 {
                result.positive_tokens.insert(token.clone());
            } else if polarity < 0 {
                result.negative_tokens.insert(token.clone());
            }
            result.score += polarity;
        }

        result.comparative = if tokens.is_empty() {
            0.0
        } else {
            result.score as f64 / tokens.len() as f64
        };

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> LexiconScorer {
        LexiconScorer::new(Arc::new(Lexicon::bundled().unwrap()))
    }

    fn set(words: &[&str]) -> std::collections::BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_positive_review() {
        let result = scorer().score("This movie was great and wonderful");
        assert_eq!(result.score, 7);
        assert!((result.comparative - 7.0 / 6.0).abs() < 1e-9);
        assert_eq!(result.positive_tokens, set(&["great", "wonderful"]));
        assert!(result.negative_tokens.is_empty());
    }

    #[test]
    fn test_negative_review() {
        let result = scorer().score("This movie was terrible and bad");
        assert_eq!(result.score, -6);
        assert!((result.comparative - (-1.0)).abs() < 1e-9);
        assert_eq!(result.negative_tokens, set(&["terrible", "bad"]));
        assert!(result.positive_tokens.is_empty());
    }

    #[test]
    fn test_repeated_word_counts_each_time() {
        let result = scorer().score("great great great");
        assert_eq!(result.score, 9);
        assert_eq!(result.positive_tokens, set(&["great"]));
    }

    #[test]
    fn test_punctuation_and_case() {
        let result = scorer().score("GREAT!!! (Truly) \"wonderful\".");
        assert_eq!(result.score, 7);
        assert_eq!(result.positive_tokens, set(&["great", "wonderful"]));
    }

    #[test]
    fn test_empty_text_has_zero_comparative() {
        let result = scorer().score("");
        assert_eq!(result.score, 0);
        assert_eq!(result.comparative, 0.0);

        let result = scorer().score("  ?! ... ");
        assert_eq!(result.comparative, 0.0);
    }

    #[test]
    fn test_unmatched_tokens_count_towards_comparative() {
        let result = scorer().score("popcorn seats great screen");
        assert_eq!(result.score, 3);
        assert!((result.comparative - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_critic_vocabulary_is_scored() {
        let result = scorer().score("A brilliant masterpiece, if a little disappointing");
        assert_eq!(result.score, 6);
        assert_eq!(result.positive_tokens, set(&["brilliant", "masterpiece"]));
        assert_eq!(result.negative_tokens, set(&["disappointing"]));

        let result = scorer().score("Astounding. I applaud it, though the middle act annoys");
        assert_eq!(result.score, 3);
        assert_eq!(result.positive_tokens, set(&["astounding", "applaud"]));
        assert_eq!(result.negative_tokens, set(&["annoys"]));
    }

    #[test]
    fn test_newlines_are_token_boundaries() {
        let result = scorer().score("great\nwonderful");
        assert_eq!(result.score, 7);
    }

    #[test]
    fn test_negation_disabled_by_default() {
        let result = scorer().score("not great");
        assert_eq!(result.score, 3);
        assert!(result.is_positive_token("great"));
    }

    #[test]
    fn test_negation_inverts_polarity() {
        let scorer = scorer().with_negation(true);
        let result = scorer.score("not great, never boring");
        assert_eq!(result.score, 0);
        assert_eq!(result.negative_tokens, set(&["great"]));
        assert_eq!(result.positive_tokens, set(&["boring"]));

        let result = scorer.score("Don't miss it");
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_tokenize_keeps_hyphens_and_apostrophes() {
        let tokens = scorer().tokenize("Well-made, isn't it?");
        assert_eq!(tokens, vec!["well-made", "isn't", "it"]);
    }
}
