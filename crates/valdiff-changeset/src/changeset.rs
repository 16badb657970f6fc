//! Flattening: collapse a structural diff into a single-level override map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use valdiff_diff::Difference;
use valdiff_types::Scalar;

/// Ordered mapping from dotted path to the previous ("from") scalar value.
///
/// Keys appear at most once. Inserting an existing key replaces its value
/// but keeps the position of the first insertion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeSet {
    entries: IndexMap<String, Scalar>,
}

impl ChangeSet {
    /// Create an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: Scalar) -> Option<Scalar> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Scalar> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = (&'a String, &'a Scalar);
    type IntoIter = indexmap::map::Iter<'a, String, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Scalar)> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = (K, Scalar)>>(iter: I) -> Self {
        let mut changes = Self::new();
        for (key, value) in iter {
            changes.insert(key, value);
        }
        changes
    }
}

/// Flatten differences into a change set.
///
/// Only value changes are recorded, each under its dotted path with the
/// left-hand ("from") value. Additions, removals, type changes and order
/// changes are skipped. When two paths share a dotted form the later one
/// wins.
pub fn flatten<'a>(differences: impl IntoIterator<Item = &'a Difference>) -> ChangeSet {
    let mut changes = ChangeSet::new();
    let mut skipped = 0usize;

    for difference in differences {
        let Some(from) = difference.changed_from() else {
            skipped += 1;
            continue;
        };
        let key = difference.path.dotted();
        if let Some(previous) = changes.insert(key.clone(), from.clone()) {
            warn!(key = %key, previous = %previous, value = %from, "dotted key collision; keeping later value");
        }
    }

    debug!(entries = changes.len(), skipped, "differences flattened");
    changes
}
