use std::path::PathBuf;
use thiserror::Error;

/// Failure while retrieving a user's diary
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("username must not be empty")]
    InvalidUsername,

    /// The feed service answered with a non-success status
    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("request to diary feed failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not decode diary feed: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// HTTP status of an upstream rejection
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Upstream { status, .. } => Some(*status),
            FetchError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
