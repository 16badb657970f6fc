use std::fmt;

use serde::{Deserialize, Serialize};

use crate::node::Node;
use crate::path::{Path, PathElement};

/// Which side of a comparison a document belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Identifies where a document came from, for error reporting.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceId {
    pub side: Side,
    /// File path or release reference (`name@revision`).
    pub name: String,
}

impl SourceId {
    pub fn new(side: Side, name: impl Into<String>) -> Self {
        Self {
            side,
            name: name.into(),
        }
    }

    pub fn left(name: impl Into<String>) -> Self {
        Self::new(Side::Left, name)
    }

    pub fn right(name: impl Into<String>) -> Self {
        Self::new(Side::Right, name)
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.side, self.name)
    }
}

/// A parsed input document. Read-only once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    source: SourceId,
    root: Node,
}

impl Document {
    pub fn new(source: SourceId, root: Node) -> Self {
        Self { source, root }
    }

    pub fn source(&self) -> &SourceId {
        &self.source
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// Look up the node at `path`, if it exists.
    pub fn get(&self, path: &Path) -> Option<&Node> {
        path.elements()
            .iter()
            .try_fold(&self.root, |node, element| match (node, element) {
                (Node::Mapping(map), PathElement::Key(k)) => map.get(k),
                (Node::Sequence(items), PathElement::Index(i)) => items.get(*i),
                _ => None,
            })
    }
}
