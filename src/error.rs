use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the analysis passes and the log source.
///
/// Line-level non-matches are never errors: a line that yields no field
/// or time token is skipped and the pass continues. Only file-level and
/// pattern-level failures reach this type, and they fail the whole call
/// with no partial result.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("file {path:?} has no configured source URL and does not exist locally")]
    NotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("time template {template:?} produced an invalid matcher")]
    MalformedPattern {
        template: String,
        source: regex::Error,
    },

    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },
}

pub type Result<T> = std::result::Result<T, LogError>;
