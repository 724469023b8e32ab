use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading the stop-word list or the sentiment lexicon
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{resource}: invalid row at line {line}: {message}")]
    Parse {
        resource: String,
        line: u64,
        message: String,
    },

    #[error("{resource} contains no entries")]
    Empty { resource: String },
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A reviewed diary entry lacks a field the analysis needs
    #[error("diary entry #{index} is missing required field `{field}`")]
    MalformedEntry { index: usize, field: &'static str },

    #[error(transparent)]
    Resource(#[from] ResourceError),
}
