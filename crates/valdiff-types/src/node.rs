use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A numeric scalar.
///
/// Integers that fit in an `i64` are always stored as [`Number::Int`];
/// [`Number::UInt`] only carries values above `i64::MAX`. This keeps the
/// representation canonical, so equal integers compare equal regardless of
/// which parser produced them.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Number {
    /// Build a canonical number from an unsigned integer.
    pub fn from_u64(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(i) => Self::Int(i),
            Err(_) => Self::UInt(n),
        }
    }

    /// Returns `true` for the floating-point variant.
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            // NaN is equal to itself here so a document always equals itself.
            (Self::Float(a), Self::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => false,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
        }
    }
}

/// A leaf value: the closed set of values a change set can hold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Scalar {
    /// Returns `true` if this scalar is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short type name used in log output.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::Number(Number::Int(n))
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Self::Number(Number::Int(n.into()))
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Self::Number(Number::Float(n))
    }
}

/// The structural kind of a [`Node`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Scalar,
    Sequence,
    Mapping,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scalar => "scalar",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

/// One node of a parsed document tree.
///
/// Mapping keys are unique and keep their document order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Scalar(Scalar),
    Sequence(Vec<Node>),
    Mapping(IndexMap<String, Node>),
}

impl Node {
    /// An empty mapping, the tree of an empty document.
    pub fn empty_mapping() -> Self {
        Self::Mapping(IndexMap::new())
    }

    /// The structural kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Scalar(_) => NodeKind::Scalar,
            Self::Sequence(_) => NodeKind::Sequence,
            Self::Mapping(_) => NodeKind::Mapping,
        }
    }

    /// Returns `true` if this node is the `null` scalar.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

impl From<Scalar> for Node {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Node {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        Self::Mapping(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u64_is_canonical() {
        assert_eq!(Number::from_u64(7), Number::Int(7));
        assert_eq!(Number::from_u64(u64::MAX), Number::UInt(u64::MAX));
    }

    #[test]
    fn nan_equals_itself() {
        let a = Number::Float(f64::NAN);
        assert_eq!(a, a);
        assert_ne!(Number::Float(1.0), Number::Int(1));
    }

    #[test]
    fn scalar_display() {
        assert_eq!(Scalar::Null.to_string(), "null");
        assert_eq!(Scalar::from(true).to_string(), "true");
        assert_eq!(Scalar::from(42).to_string(), "42");
        assert_eq!(Scalar::from("nginx").to_string(), "nginx");
    }

    #[test]
    fn node_kinds() {
        assert_eq!(Node::from(Scalar::Null).kind(), NodeKind::Scalar);
        assert_eq!(Node::Sequence(vec![]).kind(), NodeKind::Sequence);
        assert_eq!(Node::empty_mapping().kind(), NodeKind::Mapping);
        assert_eq!(NodeKind::Mapping.to_string(), "mapping");
    }

    #[test]
    fn mapping_keeps_insertion_order() {
        let node: Node = [
            ("zeta", Node::from(Scalar::from(1))),
            ("alpha", Node::from(Scalar::from(2))),
        ]
        .into_iter()
        .collect();
        let keys: Vec<_> = node.as_mapping().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn serde_json_shape() {
        let node: Node = [
            ("replicas", Node::from(Scalar::from(3))),
            ("tag", Node::from(Scalar::Null)),
            ("ports", Node::Sequence(vec![Node::from(Scalar::from(80))])),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"replicas":3,"tag":null,"ports":[80]}"#);

        let parsed: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, node);
    }
}
