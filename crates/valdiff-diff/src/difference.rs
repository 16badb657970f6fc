//! Difference records produced by the structural differ.

use std::fmt;

use valdiff_types::{Node, Path, Scalar};

/// What kind of discrepancy a [`Difference`] describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DifferenceKind {
    /// Two scalars at the same path differ.
    ValueChanged,
    /// A key or trailing sequence element exists only on the right.
    KeyAdded,
    /// A key or trailing sequence element exists only on the left.
    KeyRemoved,
    /// The nodes at the same path are of different kinds.
    TypeChanged,
    /// Two sequences hold the same elements in a different order.
    OrderChanged,
}

impl fmt::Display for DifferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ValueChanged => "value-changed",
            Self::KeyAdded => "key-added",
            Self::KeyRemoved => "key-removed",
            Self::TypeChanged => "type-changed",
            Self::OrderChanged => "order-changed",
        };
        f.write_str(name)
    }
}

/// A before/after pair. Additions carry only `to`, removals only `from`.
#[derive(Clone, Debug, PartialEq)]
pub struct Detail {
    pub from: Option<Node>,
    pub to: Option<Node>,
}

/// One discrepancy between two documents at a given path.
#[derive(Clone, Debug, PartialEq)]
pub struct Difference {
    pub path: Path,
    pub kind: DifferenceKind,
    pub details: Vec<Detail>,
}

impl Difference {
    pub(crate) fn new(path: Path, kind: DifferenceKind, from: Option<Node>, to: Option<Node>) -> Self {
        Self {
            path,
            kind,
            details: vec![Detail { from, to }],
        }
    }

    /// The first detail record, if any.
    pub fn first_detail(&self) -> Option<&Detail> {
        self.details.first()
    }

    /// The "from" scalar of a value change; `None` for every other kind.
    pub fn changed_from(&self) -> Option<&Scalar> {
        if self.kind != DifferenceKind::ValueChanged {
            return None;
        }
        self.first_detail()?.from.as_ref()?.as_scalar()
    }
}

/// The ordered result of comparing two documents.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentDiff {
    /// Differences in depth-first document order.
    pub differences: Vec<Difference>,
}

impl DocumentDiff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the documents were identical.
    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }

    /// Number of differences.
    pub fn len(&self) -> usize {
        self.differences.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Difference> {
        self.differences.iter()
    }

    /// Number of differences of the given kind.
    pub fn count(&self, kind: DifferenceKind) -> usize {
        self.differences.iter().filter(|d| d.kind == kind).count()
    }

    pub fn additions(&self) -> usize {
        self.count(DifferenceKind::KeyAdded)
    }

    pub fn removals(&self) -> usize {
        self.count(DifferenceKind::KeyRemoved)
    }

    pub fn modifications(&self) -> usize {
        self.count(DifferenceKind::ValueChanged)
    }

    pub fn type_changes(&self) -> usize {
        self.count(DifferenceKind::TypeChanged)
    }

    pub fn order_changes(&self) -> usize {
        self.count(DifferenceKind::OrderChanged)
    }
}

impl<'a> IntoIterator for &'a DocumentDiff {
    type Item = &'a Difference;
    type IntoIter = std::slice::Iter<'a, Difference>;

    fn into_iter(self) -> Self::IntoIter {
        self.differences.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(s: Scalar) -> Option<Node> {
        Some(Node::Scalar(s))
    }

    #[test]
    fn kind_display() {
        assert_eq!(DifferenceKind::ValueChanged.to_string(), "value-changed");
        assert_eq!(DifferenceKind::OrderChanged.to_string(), "order-changed");
    }

    #[test]
    fn changed_from_only_for_value_changes() {
        let path = Path::root().key("replicas");
        let changed = Difference::new(
            path.clone(),
            DifferenceKind::ValueChanged,
            scalar(Scalar::from(1)),
            scalar(Scalar::from(2)),
        );
        assert_eq!(changed.changed_from(), Some(&Scalar::from(1)));

        let removed = Difference::new(path, DifferenceKind::KeyRemoved, scalar(Scalar::from(1)), None);
        assert_eq!(removed.changed_from(), None);
    }

    #[test]
    fn counts_by_kind() {
        let diff = DocumentDiff {
            differences: vec![
                Difference::new(Path::root().key("a"), DifferenceKind::KeyAdded, None, scalar(Scalar::Null)),
                Difference::new(Path::root().key("b"), DifferenceKind::KeyAdded, None, scalar(Scalar::Null)),
                Difference::new(Path::root().key("c"), DifferenceKind::TypeChanged, None, None),
            ],
        };
        assert_eq!(diff.len(), 3);
        assert_eq!(diff.additions(), 2);
        assert_eq!(diff.type_changes(), 1);
        assert_eq!(diff.removals(), 0);
        assert_eq!((&diff).into_iter().count(), 3);
    }
}
