use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use crate::review::Review;

/// Result of scoring one text against a polarity lexicon.
///
/// Token sets hold the scorer's normalized form of each matched word, so
/// membership checks must use the same normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SentimentResult {
    /// Sum of matched token polarities
    pub score: i32,
    /// `score` divided by token count, 0 for texts without tokens
    pub comparative: f64,
    pub positive_tokens: BTreeSet<String>,
    pub negative_tokens: BTreeSet<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Polarity::Positive
        } else if value < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

impl SentimentResult {
    pub fn is_positive_token(&self, token: &str) -> bool {
        self.positive_tokens.contains(token)
    }

    pub fn is_negative_token(&self, token: &str) -> bool {
        self.negative_tokens.contains(token)
    }

    pub fn polarity(&self) -> Polarity {
        Polarity::of(self.score as f64)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewSentiment {
    pub review: Review,
    pub sentiment: SentimentResult,
}
