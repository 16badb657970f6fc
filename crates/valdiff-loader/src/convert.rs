//! Conversion from parser value types into the document tree model.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use valdiff_types::{Node, Number, Scalar, SourceId};

use crate::error::{LoadError, LoadResult};

/// Convert a parsed YAML value. Tags are dropped and the tagged value kept.
pub(crate) fn from_yaml(document: &SourceId, value: serde_yaml::Value) -> LoadResult<Node> {
    use serde_yaml::Value;

    let node = match value {
        Value::Null => Node::Scalar(Scalar::Null),
        Value::Bool(b) => Node::Scalar(Scalar::Bool(b)),
        Value::Number(n) => Node::Scalar(Scalar::Number(yaml_number(&n))),
        Value::String(s) => Node::Scalar(Scalar::String(s)),
        Value::Sequence(items) => Node::Sequence(
            items
                .into_iter()
                .map(|item| from_yaml(document, item))
                .collect::<LoadResult<_>>()?,
        ),
        Value::Mapping(mapping) => {
            let mut map = IndexMap::with_capacity(mapping.len());
            for (key, value) in mapping {
                let key = yaml_key(document, key)?;
                let node = from_yaml(document, value)?;
                if map.insert(key.clone(), node).is_some() {
                    return Err(LoadError::parse(
                        document,
                        format!("duplicate mapping key {key:?}"),
                    ));
                }
            }
            Node::Mapping(map)
        }
        Value::Tagged(tagged) => from_yaml(document, tagged.value)?,
    };
    Ok(node)
}

/// A JSON document deserialized straight into a tree. Object key order is
/// preserved and duplicate keys are an error, as for YAML.
pub(crate) struct JsonNode(pub(crate) Node);

impl<'de> Deserialize<'de> for JsonNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(JsonNodeVisitor).map(JsonNode)
    }
}

struct JsonNodeVisitor;

impl<'de> Visitor<'de> for JsonNodeVisitor {
    type Value = Node;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Null))
    }

    fn visit_none<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Null))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Bool(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Number(Number::Int(v))))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Number(Number::from_u64(v))))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Number(Number::Float(v))))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::String(v.to_string())))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::String(v)))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Node, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(JsonNode(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(Node::Sequence(items))
    }

    fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Node, M::Error> {
        let mut entries = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(key) = map.next_key::<String>()? {
            if entries.contains_key(&key) {
                return Err(de::Error::custom(format_args!("duplicate mapping key {key:?}")));
            }
            let JsonNode(value) = map.next_value()?;
            entries.insert(key, value);
        }
        Ok(Node::Mapping(entries))
    }
}

fn yaml_key(document: &SourceId, key: serde_yaml::Value) -> LoadResult<String> {
    use serde_yaml::Value;

    match key {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(yaml_number(&n).to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Tagged(tagged) => yaml_key(document, tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => Err(LoadError::parse(
            document,
            "mapping keys must be scalars",
        )),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::Int(i)
    } else if let Some(u) = n.as_u64() {
        Number::from_u64(u)
    } else {
        Number::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}
