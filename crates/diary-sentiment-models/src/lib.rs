pub mod diary_entry;
pub mod review;
pub mod sentiment;
pub mod word_cloud;
pub mod report;

pub use diary_entry::{DiaryDates, DiaryEntry, DiaryEntryType, Film, PosterImages, PosterSize, UserRating};
pub use review::{Review, ReviewKey};
pub use sentiment::{Polarity, ReviewSentiment, SentimentResult};
pub use word_cloud::WordCloudEntry;
pub use report::AnalysisReport;
