//! Analyzer error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// A file's content could not be read or decoded as UTF-8 text
    #[error("failed to read `{name}` as text: {reason}")]
    ContentRead { name: String, reason: String },

    /// Directory traversal failed
    #[error("failed to walk `{}`: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The background analysis task panicked or was aborted
    #[error("analysis task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
