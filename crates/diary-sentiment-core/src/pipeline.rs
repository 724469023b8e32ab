// Review analysis pipeline: filter diary entries, score each review and the
// combined text, and build the word cloud from the combined text.

use crate::error::AnalysisError;
use crate::frequency::FrequencyAggregator;
use crate::resources::AnalysisResources;
use crate::tokenizer;
use diary_sentiment_config::{AnalysisConfig, NewlineMode};
use diary_sentiment_models::{AnalysisReport, DiaryEntry, Review, ReviewSentiment, WordCloudEntry};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Knobs that shape a run without changing the loaded resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    pub newline_mode: NewlineMode,
    /// Word-cloud tokens must be strictly longer than this (in characters)
    pub min_token_length: usize,
    pub word_cloud_limit: Option<usize>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            newline_mode: NewlineMode::All,
            min_token_length: 3,
            word_cloud_limit: None,
        }
    }
}

impl From<&AnalysisConfig> for PipelineOptions {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            newline_mode: config.newline_mode,
            min_token_length: config.min_token_length,
            word_cloud_limit: config.word_cloud_limit,
        }
    }
}

/// Turns one snapshot of diary entries into an [`AnalysisReport`].
///
/// Holds only shared read-only resources; every call to [`run`](Self::run)
/// works on its own input and returns a fresh report.
#[derive(Debug, Clone)]
pub struct ReviewPipeline {
    resources: AnalysisResources,
    options: PipelineOptions,
}

impl ReviewPipeline {
    pub fn new(resources: AnalysisResources, options: PipelineOptions) -> Self {
        Self { resources, options }
    }

    pub fn resources(&self) -> &AnalysisResources {
        &self.resources
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    #[instrument(skip_all, fields(entries = entries.len()))]
    pub fn run(&self, entries: &[DiaryEntry]) -> Result<AnalysisReport, AnalysisError> {
        let start = Instant::now();

        let reviews = build_reviews(entries, self.options.newline_mode)?;
        debug!(
            total_entries = entries.len(),
            reviewed_entries = reviews.len(),
            "Filtered diary entries"
        );

        let overall_text = reviews
            .iter()
            .map(|r| r.review_text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let overall_sentiment = self.resources.scorer.score(&overall_text);

        let reviews: Vec<ReviewSentiment> = reviews
            .into_iter()
            .map(|review| {
                let sentiment = self.resources.scorer.score(&review.review_text);
                ReviewSentiment { review, sentiment }
            })
            .collect();

        let word_cloud = self.word_cloud(&overall_text);

        let report = AnalysisReport {
            overall_sentiment,
            reviews,
            word_cloud,
        };

        let duplicates = report.duplicate_keys();
        if !duplicates.is_empty() {
            warn!(
                duplicates = ?duplicates,
                "Several reviews share the same (title, published) key"
            );
        }

        info!(
            reviews = report.reviews.len(),
            score = report.overall_sentiment.score,
            comparative = report.overall_sentiment.comparative,
            words = report.word_cloud.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Review analysis completed"
        );

        Ok(report)
    }

    /// Normalize, drop stop words, count, then keep tokens longer than the
    /// minimum length. Ranked by count, ties in first-seen order.
    pub fn word_cloud(&self, text: &str) -> Vec<WordCloudEntry> {
        let tokens = self.resources.stop_words.filter(tokenizer::words(text).collect());
        let aggregator: FrequencyAggregator = tokens.into_iter().collect();

        let mut entries: Vec<WordCloudEntry> = aggregator
            .ranked()
            .into_iter()
            .filter(|entry| entry.token.chars().count() > self.options.min_token_length)
            .collect();

        if let Some(limit) = self.options.word_cloud_limit {
            entries.truncate(limit);
        }

        debug!(
            distinct_tokens = aggregator.distinct(),
            kept = entries.len(),
            "Built word cloud"
        );
        entries
    }
}

/// Reviewed diary-type entries, in input order, as [`Review`]s.
///
/// Fails on the first qualifying entry that lacks a title or publish date;
/// entries that do not qualify are never inspected.
pub fn build_reviews(entries: &[DiaryEntry], newline_mode: NewlineMode) -> Result<Vec<Review>, AnalysisError> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.is_reviewed_diary())
        .map(|(index, entry)| build_review(index, entry, newline_mode))
        .collect()
}

pub fn build_review(index: usize, entry: &DiaryEntry, newline_mode: NewlineMode) -> Result<Review, AnalysisError> {
    let movie_title = entry
        .title()
        .ok_or(AnalysisError::MalformedEntry { index, field: "film.title" })?;
    let published_at = entry
        .published_at()
        .ok_or(AnalysisError::MalformedEntry { index, field: "date.published" })?;
    let review_text = entry
        .review
        .as_deref()
        .ok_or(AnalysisError::MalformedEntry { index, field: "review" })?;

    Ok(Review {
        movie_title: movie_title.to_string(),
        review_text: collapse_newlines(review_text, newline_mode),
        published_at,
        entry: entry.clone(),
    })
}

pub fn collapse_newlines(text: &str, mode: NewlineMode) -> String {
    match mode {
        NewlineMode::FirstOnly => text.replacen('\n', " ", 1),
        NewlineMode::All => text.replace('\n', " "),
    }
}
