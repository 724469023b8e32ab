use crate::sentiment::SentimentScorer;
use diary_sentiment_models::{Polarity, SentimentResult};
use serde::Serialize;

/// A review word as written, tagged with the polarity it contributed
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HighlightedWord {
    pub word: String,
    pub polarity: Polarity,
}

/// Tag each space-separated word of `text` by membership in `result`'s token
/// sets, normalizing through `scorer` so matches line up with how the text
/// was scored. Negative membership wins when a word is in both sets.
pub fn highlight(text: &str, result: &SentimentResult, scorer: &dyn SentimentScorer) -> Vec<HighlightedWord> {
    text.split(' ')
        .map(|word| {
            let token = scorer.normalize_token(word);
            let polarity = if result.is_negative_token(&token) {
                Polarity::Negative
            } else if result.is_positive_token(&token) {
                Polarity::Positive
            } else {
                Polarity::Neutral
            };

            HighlightedWord {
                word: word.to_string(),
                polarity,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::sentiment::LexiconScorer;
    use std::sync::Arc;

    #[test]
    fn test_highlight_marks_scored_words() {
        let scorer = LexiconScorer::new(Arc::new(Lexicon::bundled().unwrap()));
        let text = "Great acting, but the ending? Awful.";
        let result = scorer.score(text);
        let words = highlight(text, &result, &scorer);

        let tagged: Vec<(&str, Polarity)> = words.iter().map(|w| (w.word.as_str(), w.polarity)).collect();
        assert_eq!(
            tagged,
            vec![
                ("Great", Polarity::Positive),
                ("acting,", Polarity::Neutral),
                ("but", Polarity::Neutral),
                ("the", Polarity::Neutral),
                ("ending?", Polarity::Neutral),
                ("Awful.", Polarity::Negative),
            ]
        );
    }

    #[test]
    fn test_highlight_uses_scorer_normalization() {
        // The word-cloud tokenizer would strip the hyphen; the scorer keeps it
        let scorer = LexiconScorer::new(Arc::new(Lexicon::from_pairs([("must-see", 3)])));
        let text = "A must-see!";
        let result = scorer.score(text);
        let words = highlight(text, &result, &scorer);
        assert_eq!(words[1].polarity, Polarity::Positive);
    }

    #[test]
    fn test_negative_wins_over_positive() {
        let scorer = LexiconScorer::new(Arc::new(Lexicon::bundled().unwrap())).with_negation(true);
        let text = "great, not great";
        let result = scorer.score(text);
        assert!(result.is_positive_token("great"));
        assert!(result.is_negative_token("great"));

        let words = highlight(text, &result, &scorer);
        assert_eq!(words[0].polarity, Polarity::Negative);
    }
}
