use serde::{Deserialize, Serialize};

/// One word of the word cloud with its occurrence count across all reviews
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordCloudEntry {
    pub token: String,
    pub count: usize,
}

impl WordCloudEntry {
    pub fn new(token: impl Into<String>, count: usize) -> Self {
        Self { token: token.into(), count }
    }
}
