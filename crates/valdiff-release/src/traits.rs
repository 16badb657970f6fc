use async_trait::async_trait;
use valdiff_types::Node;

use crate::error::ReleaseResult;

/// Source of historical release values.
///
/// Revisions are numbered from 1. Implementations surface failures as-is and
/// do not retry.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// The latest revision number of `release`.
    async fn current_version(&self, release: &str) -> ReleaseResult<u32>;

    /// The full values tree of `release` at `revision`.
    async fn get_values(&self, release: &str, revision: u32) -> ReleaseResult<Node>;
}
