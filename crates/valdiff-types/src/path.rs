use std::fmt;

/// One step into a document tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathElement {
    /// A mapping key.
    Key(String),
    /// A sequence index (0-based).
    Index(usize),
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(k) => f.write_str(k),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for PathElement {
    fn from(k: &str) -> Self {
        Self::Key(k.to_string())
    }
}

impl From<usize> for PathElement {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

/// Location of a node, as the ordered list of steps from the document root.
///
/// The empty path addresses the root itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(Vec<PathElement>);

impl Path {
    /// The root path.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A new path extended by a mapping key.
    pub fn key(&self, key: impl Into<String>) -> Self {
        self.child(PathElement::Key(key.into()))
    }

    /// A new path extended by a sequence index.
    pub fn index(&self, index: usize) -> Self {
        self.child(PathElement::Index(index))
    }

    fn child(&self, element: PathElement) -> Self {
        let mut elements = Vec::with_capacity(self.0.len() + 1);
        elements.extend_from_slice(&self.0);
        elements.push(element);
        Self(elements)
    }

    /// Elements joined with `.`; the root path yields the empty string.
    ///
    /// Keys that themselves contain `.` are not escaped, so distinct paths
    /// can share a dotted form.
    pub fn dotted(&self) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("(root)")
        } else {
            f.write_str(&self.dotted())
        }
    }
}

impl<E: Into<PathElement>> FromIterator<E> for Path {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<PathElement>> for Path {
    fn from(elements: Vec<PathElement>) -> Self {
        Self(elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn root_is_empty() {
        let root = Path::root();
        assert!(root.is_root());
        assert_eq!(root.dotted(), "");
        assert_eq!(root.to_string(), "(root)");
    }

    #[test]
    fn dotted_joins_keys_and_indices() {
        let path = Path::root().key("list").index(2);
        assert_eq!(path.dotted(), "list.2");
        assert_eq!(path.len(), 2);
        assert_eq!(path.elements()[1], PathElement::Index(2));
    }

    #[test]
    fn child_does_not_mutate_parent() {
        let parent = Path::root().key("a");
        let child = parent.key("b");
        assert_eq!(parent.dotted(), "a");
        assert_eq!(child.dotted(), "a.b");
    }

    #[test]
    fn dotted_keys_can_collide() {
        let literal = Path::root().key("a.b");
        let nested = Path::root().key("a").key("b");
        assert_ne!(literal, nested);
        assert_eq!(literal.dotted(), nested.dotted());
    }

    #[test]
    fn collect_from_mixed_elements() {
        let path: Path = vec![PathElement::from("image"), PathElement::from(0usize)]
            .into_iter()
            .collect();
        assert_eq!(path.to_string(), "image.0");
    }

    proptest! {
        #[test]
        fn dotted_splits_back_into_keys(keys in prop::collection::vec("[a-z_]{1,8}", 1..6)) {
            let path: Path = keys.iter().map(String::as_str).collect();
            let split: Vec<String> = path.dotted().split('.').map(String::from).collect();
            prop_assert_eq!(split, keys);
        }
    }
}
