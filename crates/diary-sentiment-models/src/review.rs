use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::diary_entry::DiaryEntry;

/// A reviewed diary entry prepared for analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub movie_title: String,
    pub review_text: String, // Newlines collapsed to spaces
    pub published_at: i64, // Milliseconds since epoch
    pub entry: DiaryEntry, // Source entry, kept for presentation fields
}

/// Presentation identity of a review: (movie title, published timestamp)
pub type ReviewKey = (String, i64);

impl Review {
    pub fn key(&self) -> ReviewKey {
        (self.movie_title.clone(), self.published_at)
    }

    pub fn published_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.published_at)
    }
}
