//! Structural diff: walk two document trees and record every discrepancy.
//!
//! Mappings are compared by key, sequences strictly by index. Inserting an
//! element in the middle of a list therefore shows up as a change at every
//! later index; no attempt is made to match list items by identity.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use valdiff_types::{Document, Node, Path};

use crate::difference::{Difference, DifferenceKind, DocumentDiff};

/// Opt-in comparison policies. The default compares strictly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Treat a key holding `null` as equal to the key being absent.
    pub null_equals_absent: bool,
    /// Report a permuted sequence of equal length as one `OrderChanged`
    /// instead of per-index value changes.
    pub detect_order_changes: bool,
}

/// Compare two documents with strict default options.
pub fn diff(left: &Document, right: &Document) -> DocumentDiff {
    diff_with(left, right, DiffOptions::default())
}

/// Compare two documents.
pub fn diff_with(left: &Document, right: &Document, options: DiffOptions) -> DocumentDiff {
    let result = diff_nodes(left.root(), right.root(), options);
    debug!(
        left = %left.source(),
        right = %right.source(),
        modified = result.modifications(),
        added = result.additions(),
        removed = result.removals(),
        type_changed = result.type_changes(),
        order_changed = result.order_changes(),
        "documents compared"
    );
    result
}

/// Compare two bare trees, starting at the root path.
pub fn diff_nodes(left: &Node, right: &Node, options: DiffOptions) -> DocumentDiff {
    let mut differ = Differ {
        options,
        differences: Vec::new(),
    };
    differ.compare(&Path::root(), left, right);
    DocumentDiff {
        differences: differ.differences,
    }
}

struct Differ {
    options: DiffOptions,
    differences: Vec<Difference>,
}

impl Differ {
    fn compare(&mut self, path: &Path, left: &Node, right: &Node) {
        match (left, right) {
            (Node::Mapping(l), Node::Mapping(r)) => self.compare_mappings(path, l, r),
            (Node::Sequence(l), Node::Sequence(r)) => self.compare_sequences(path, l, r),
            (Node::Scalar(l), Node::Scalar(r)) => {
                if l != r {
                    self.push(path.clone(), DifferenceKind::ValueChanged, Some(left), Some(right));
                }
            }
            _ => self.push(path.clone(), DifferenceKind::TypeChanged, Some(left), Some(right)),
        }
    }

    fn compare_mappings(
        &mut self,
        path: &Path,
        left: &IndexMap<String, Node>,
        right: &IndexMap<String, Node>,
    ) {
        for (key, l) in left {
            match right.get(key) {
                Some(r) => self.compare(&path.key(key.as_str()), l, r),
                None if self.skip_absent(l) => {}
                None => self.push(path.key(key.as_str()), DifferenceKind::KeyRemoved, Some(l), None),
            }
        }

        for (key, r) in right {
            if !left.contains_key(key) && !self.skip_absent(r) {
                self.push(path.key(key.as_str()), DifferenceKind::KeyAdded, None, Some(r));
            }
        }
    }

    fn compare_sequences(&mut self, path: &Path, left: &[Node], right: &[Node]) {
        if self.options.detect_order_changes && is_permutation(left, right) {
            self.differences.push(Difference::new(
                path.clone(),
                DifferenceKind::OrderChanged,
                Some(Node::Sequence(left.to_vec())),
                Some(Node::Sequence(right.to_vec())),
            ));
            return;
        }

        let shared = left.len().min(right.len());
        for (i, (l, r)) in left.iter().zip(right).enumerate() {
            self.compare(&path.index(i), l, r);
        }
        for (i, l) in left.iter().enumerate().skip(shared) {
            self.push(path.index(i), DifferenceKind::KeyRemoved, Some(l), None);
        }
        for (i, r) in right.iter().enumerate().skip(shared) {
            self.push(path.index(i), DifferenceKind::KeyAdded, None, Some(r));
        }
    }

    fn skip_absent(&self, present: &Node) -> bool {
        self.options.null_equals_absent && present.is_null()
    }

    fn push(&mut self, path: Path, kind: DifferenceKind, from: Option<&Node>, to: Option<&Node>) {
        self.differences
            .push(Difference::new(path, kind, from.cloned(), to.cloned()));
    }
}

/// Same length, same elements, different order.
fn is_permutation(left: &[Node], right: &[Node]) -> bool {
    if left.len() != right.len() || left == right {
        return false;
    }
    let mut used = vec![false; right.len()];
    left.iter().all(|l| {
        let found = (0..right.len()).find(|&i| !used[i] && right[i] == *l);
        match found {
            Some(i) => {
                used[i] = true;
                true
            }
            None => false,
        }
    })
}
