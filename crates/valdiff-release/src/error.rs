use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("release not found: {0}")]
    NotFound(String),

    #[error("release {release} has no revision before {current}")]
    NoPreviousRevision { release: String, current: u32 },

    #[error("release {release} has no revision {requested} (latest is {current})")]
    RevisionOutOfRange {
        release: String,
        requested: u32,
        current: u32,
    },

    #[error("release source unreachable: {0}")]
    Connection(String),

    #[error("helm exited with {status}: {stderr}")]
    Command { status: String, stderr: String },

    #[error("unexpected helm output: {0}")]
    Malformed(String),

    #[error("invalid release data: {0}")]
    Load(#[from] valdiff_loader::LoadError),
}

impl ReleaseError {
    /// Returns `true` for the not-found category (missing release or revision).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::NoPreviousRevision { .. } | Self::RevisionOutOfRange { .. }
        )
    }
}

pub type ReleaseResult<T> = Result<T, ReleaseError>;
