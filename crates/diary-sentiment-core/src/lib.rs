pub mod error;
pub mod tokenizer;
pub mod stopwords;
pub mod lexicon;
pub mod sentiment;
pub mod highlight;
pub mod frequency;
pub mod resources;
pub mod pipeline;
pub mod session;

pub use error::{AnalysisError, ResourceError};
pub use stopwords::{StopWord, StopWordList};
pub use lexicon::Lexicon;
pub use sentiment::{LexiconScorer, SentimentScorer};
pub use highlight::{highlight, HighlightedWord};
pub use frequency::FrequencyAggregator;
pub use resources::AnalysisResources;
pub use pipeline::{PipelineOptions, ReviewPipeline};
pub use session::{AnalysisSession, RequestToken};
