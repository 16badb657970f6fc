//! Revision selection policy.

use crate::error::{ReleaseError, ReleaseResult};

/// Pick the revision to diff against.
///
/// `requested == 0` selects the revision just before `current`. A release at
/// revision 1 has no predecessor, which is reported instead of yielding 0.
/// Explicit revisions must not exceed `current`.
pub fn resolve_revision(release: &str, requested: u32, current: u32) -> ReleaseResult<u32> {
    match requested {
        0 if current <= 1 => Err(ReleaseError::NoPreviousRevision {
            release: release.to_string(),
            current,
        }),
        0 => Ok(current - 1),
        n if n > current => Err(ReleaseError::RevisionOutOfRange {
            release: release.to_string(),
            requested: n,
            current,
        }),
        n => Ok(n),
    }
}
