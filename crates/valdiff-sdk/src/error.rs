use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error(transparent)]
    Load(#[from] valdiff_loader::LoadError),

    #[error(transparent)]
    Release(#[from] valdiff_release::ReleaseError),

    #[error(transparent)]
    ChangeSet(#[from] valdiff_changeset::ChangeSetError),
}

impl SdkError {
    /// Returns `true` for a missing file, release or revision.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Load(e) => e.is_not_found(),
            Self::Release(e) => e.is_not_found(),
            Self::ChangeSet(_) => false,
        }
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
