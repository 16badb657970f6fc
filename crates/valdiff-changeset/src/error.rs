//! Error types for the change set crate.

use std::path::PathBuf;

/// Errors that can occur while serializing or writing a change set.
#[derive(Debug, thiserror::Error)]
pub enum ChangeSetError {
    /// YAML encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// Writing the output file failed.
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias for change set results.
pub type ChangeSetResult<T> = Result<T, ChangeSetError>;
