use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use valdiff_types::Node;

use crate::error::{ReleaseError, ReleaseResult};
use crate::traits::ReleaseSource;

/// In-memory release history.
///
/// Intended for tests and embedding. Each pushed values tree becomes the next
/// revision of its release, starting at 1.
pub struct InMemoryReleaseSource {
    releases: RwLock<HashMap<String, Vec<Node>>>,
}

impl InMemoryReleaseSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self {
            releases: RwLock::new(HashMap::new()),
        }
    }

    /// Record a new revision of `release` and return its number.
    pub fn push(&self, release: &str, values: Node) -> u32 {
        let mut map = self.releases.write().expect("lock poisoned");
        let history = map.entry(release.to_string()).or_default();
        history.push(values);
        history.len() as u32
    }

    /// Number of releases held.
    pub fn len(&self) -> usize {
        self.releases.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no release has been pushed.
    pub fn is_empty(&self) -> bool {
        self.releases.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryReleaseSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReleaseSource for InMemoryReleaseSource {
    async fn current_version(&self, release: &str) -> ReleaseResult<u32> {
        let map = self.releases.read().expect("lock poisoned");
        map.get(release)
            .map(|history| history.len() as u32)
            .ok_or_else(|| ReleaseError::NotFound(release.to_string()))
    }

    async fn get_values(&self, release: &str, revision: u32) -> ReleaseResult<Node> {
        let map = self.releases.read().expect("lock poisoned");
        let history = map
            .get(release)
            .ok_or_else(|| ReleaseError::NotFound(release.to_string()))?;
        let index = (revision as usize)
            .checked_sub(1)
            .ok_or_else(|| ReleaseError::NotFound(format!("{release}@{revision}")))?;
        history
            .get(index)
            .cloned()
            .ok_or_else(|| ReleaseError::NotFound(format!("{release}@{revision}")))
    }
}

impl std::fmt::Debug for InMemoryReleaseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryReleaseSource")
            .field("release_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valdiff_types::Scalar;

    fn values(tag: &str) -> Node {
        [("tag", Node::Scalar(Scalar::from(tag)))].into_iter().collect()
    }

    #[tokio::test]
    async fn push_assigns_revisions() {
        let source = InMemoryReleaseSource::new();
        assert!(source.is_empty());
        assert_eq!(source.push("web", values("1.0")), 1);
        assert_eq!(source.push("web", values("1.1")), 2);
        assert_eq!(source.len(), 1);
        assert_eq!(source.current_version("web").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn get_values_by_revision() {
        let source = InMemoryReleaseSource::new();
        source.push("web", values("1.0"));
        source.push("web", values("1.1"));
        assert_eq!(source.get_values("web", 1).await.unwrap(), values("1.0"));
        assert_eq!(source.get_values("web", 2).await.unwrap(), values("1.1"));
    }

    #[tokio::test]
    async fn missing_release_and_revision() {
        let source = InMemoryReleaseSource::new();
        source.push("web", values("1.0"));

        let err = source.current_version("api").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(source.get_values("web", 0).await.unwrap_err().is_not_found());
        assert!(source.get_values("web", 2).await.unwrap_err().is_not_found());
    }
}
