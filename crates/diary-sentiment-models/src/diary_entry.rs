use serde::{Deserialize, Serialize};

/// One logged viewing as returned by the diary feed.
///
/// Fields the feed is known to omit are optional here so that a missing
/// `film.title` surfaces as a pipeline error instead of a parse failure of
/// the whole feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    #[serde(rename = "type")]
    pub entry_type: DiaryEntryType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub film: Option<Film>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DiaryDates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<UserRating>,
    #[serde(default)]
    pub is_rewatch: bool,
    #[serde(default)]
    pub spoilers: bool,
    #[serde(default)]
    pub uri: String,
}

impl DiaryEntry {
    /// Diary-type entry carrying a non-empty review.
    pub fn is_reviewed_diary(&self) -> bool {
        self.entry_type == DiaryEntryType::Diary && self.review.as_deref().is_some_and(|r| !r.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.film.as_ref().and_then(|f| f.title.as_deref())
    }

    pub fn published_at(&self) -> Option<i64> {
        self.date.as_ref().and_then(|d| d.published)
    }

    pub fn poster_images(&self) -> Option<&PosterImages> {
        self.film.as_ref().map(|f| &f.image)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DiaryEntryType {
    Diary,
    List,
    /// Any feed type this crate does not know about
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Film {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default)]
    pub image: PosterImages,
}

/// Millisecond epoch timestamps
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiaryDates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watched: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRating {
    pub score: f32,
    #[serde(default)]
    pub text: String,
}

/// Poster URLs at the sizes the feed publishes. Presentation only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PosterImages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiny: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterSize {
    Tiny,
    Small,
    Medium,
    Large,
}

impl PosterImages {
    /// Poster for the requested size, falling back to the nearest size that
    /// exists (larger first, then smaller).
    pub fn for_size(&self, size: PosterSize) -> Option<&str> {
        let ordered = [&self.tiny, &self.small, &self.medium, &self.large];
        let wanted = match size {
            PosterSize::Tiny => 0,
            PosterSize::Small => 1,
            PosterSize::Medium => 2,
            PosterSize::Large => 3,
        };

        ordered[wanted..]
            .iter()
            .copied()
            .chain(ordered[..wanted].iter().rev().copied())
            .find_map(|url| url.as_deref())
    }
}
