use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;
use valdiff_types::{Document, Node, Side, SourceId};

use crate::convert::{self, JsonNode};
use crate::error::{LoadError, LoadResult};

/// Input syntax of a document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// JSON for a `.json` extension, YAML otherwise.
    #[default]
    Auto,
    Yaml,
    Json,
}

impl Format {
    /// Resolve `Auto` against a file name.
    pub fn resolve(self, name: &str) -> Format {
        match self {
            Format::Auto => {
                let is_json = Path::new(name)
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
                if is_json {
                    Format::Json
                } else {
                    Format::Yaml
                }
            }
            other => other,
        }
    }
}

/// Load a document from a file, detecting the format from its extension.
pub fn load_file(path: impl AsRef<Path>, side: Side) -> LoadResult<Document> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let source = SourceId::new(side, path.display().to_string());
    load_bytes(source, &bytes, Format::Auto)
}

/// Load a document from an in-memory byte stream.
///
/// An empty document, or one whose root is `null`, loads as an empty mapping.
/// YAML merge keys are applied. Duplicate mapping keys are a parse error in
/// both formats.
pub fn load_bytes(source: SourceId, bytes: &[u8], format: Format) -> LoadResult<Document> {
    let text = std::str::from_utf8(bytes).map_err(|e| LoadError::parse(&source, e.to_string()))?;
    let format = format.resolve(&source.name);
    debug!(document = %source, len = bytes.len(), ?format, "loading document");

    let root = if text.trim().is_empty() {
        Node::empty_mapping()
    } else {
        match format {
            Format::Json => parse_json(&source, text)?,
            Format::Yaml | Format::Auto => parse_yaml(&source, text)?,
        }
    };

    let root = if root.is_null() {
        Node::empty_mapping()
    } else {
        root
    };
    Ok(Document::new(source, root))
}

fn parse_yaml(source: &SourceId, text: &str) -> LoadResult<Node> {
    let mut value: serde_yaml::Value = serde_yaml::from_str(text).map_err(|e| {
        let location = e.location();
        LoadError::Parse {
            document: source.clone(),
            line: location.as_ref().map(|l| l.line()),
            column: location.as_ref().map(|l| l.column()),
            reason: e.to_string(),
        }
    })?;
    // Merge keys (`<<: *anchor`) are resolved the way helm resolves them.
    value
        .apply_merge()
        .map_err(|e| LoadError::parse(source, e.to_string()))?;
    convert::from_yaml(source, value)
}

fn parse_json(source: &SourceId, text: &str) -> LoadResult<Node> {
    let JsonNode(node) = serde_json::from_str(text).map_err(|e| LoadError::Parse {
        document: source.clone(),
        line: (e.line() > 0).then(|| e.line()),
        column: (e.column() > 0).then(|| e.column()),
        reason: e.to_string(),
    })?;
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use valdiff_types::Scalar;

    fn left(name: &str) -> SourceId {
        SourceId::left(name)
    }

    #[test]
    fn format_resolution() {
        assert_eq!(Format::Auto.resolve("values.json"), Format::Json);
        assert_eq!(Format::Auto.resolve("VALUES.JSON"), Format::Json);
        assert_eq!(Format::Auto.resolve("values.yaml"), Format::Yaml);
        assert_eq!(Format::Auto.resolve("release@3"), Format::Yaml);
        assert_eq!(Format::Json.resolve("values.yaml"), Format::Json);
    }

    #[test]
    fn load_yaml_mapping() {
        let doc = load_bytes(left("v.yaml"), b"image:\n  tag: \"1.0\"\nreplicas: 2\n", Format::Auto)
            .unwrap();
        let root = doc.root().as_mapping().unwrap();
        assert_eq!(root.keys().collect::<Vec<_>>(), vec!["image", "replicas"]);
        assert_eq!(root["replicas"], Node::Scalar(Scalar::from(2)));
        assert_eq!(doc.source(), &left("v.yaml"));
    }

    #[test]
    fn yaml_accepts_json_text() {
        let doc = load_bytes(left("v.yaml"), br#"{"a": {"b": 1}}"#, Format::Yaml).unwrap();
        let a = &doc.root().as_mapping().unwrap()["a"];
        assert_eq!(a.as_mapping().unwrap()["b"], Node::Scalar(Scalar::from(1)));
    }

    #[test]
    fn empty_and_null_documents_are_empty_mappings() {
        let inputs: [&[u8]; 4] = [b"", b"   \n", b"~\n", b"null"];
        for input in inputs {
            let doc = load_bytes(left("v.yaml"), input, Format::Yaml).unwrap();
            assert_eq!(doc.root(), &Node::empty_mapping(), "input {input:?}");
        }
        let doc = load_bytes(left("v.json"), b"null", Format::Auto).unwrap();
        assert_eq!(doc.root(), &Node::empty_mapping());
    }

    #[test]
    fn scalar_root_is_kept() {
        let doc = load_bytes(left("v.yaml"), b"42\n", Format::Yaml).unwrap();
        assert_eq!(doc.root(), &Node::Scalar(Scalar::from(42)));
    }

    #[test]
    fn malformed_yaml_reports_line() {
        let err = load_bytes(left("bad.yaml"), b"a: 1\nb: [1, 2\n", Format::Yaml).unwrap_err();
        match err {
            LoadError::Parse { document, line, .. } => {
                assert_eq!(document, left("bad.yaml"));
                assert!(line.is_some());
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_reports_line_and_column() {
        let err = load_bytes(left("bad.json"), b"{\n  \"a\": 1,\n}", Format::Auto).unwrap_err();
        match err {
            LoadError::Parse { line, column, .. } => {
                assert_eq!(line, Some(3));
                assert!(column.is_some());
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn yaml_merge_keys_are_applied() {
        let text = b"defaults: &d\n  cpu: 1\n  mem: 2\nsvc:\n  <<: *d\n  mem: 4\n";
        let doc = load_bytes(left("v.yaml"), text, Format::Yaml).unwrap();
        let svc = doc.root().as_mapping().unwrap()["svc"].as_mapping().unwrap();
        let mut keys: Vec<_> = svc.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["cpu", "mem"]);
        assert_eq!(svc["cpu"], Node::Scalar(Scalar::from(1)));
        assert_eq!(svc["mem"], Node::Scalar(Scalar::from(4)));
    }

    #[test]
    fn yaml_merge_of_sequence_of_mappings() {
        let text = b"a: &a {x: 1}\nb: &b {y: 2}\nc:\n  <<: [*a, *b]\n";
        let doc = load_bytes(left("v.yaml"), text, Format::Yaml).unwrap();
        let c = doc.root().as_mapping().unwrap()["c"].as_mapping().unwrap();
        assert!(!c.contains_key("<<"));
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn yaml_merge_of_scalar_rejected() {
        let err = load_bytes(left("v.yaml"), b"svc:\n  <<: 3\n", Format::Yaml).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn duplicate_json_keys_rejected() {
        let err = load_bytes(left("dup.json"), b"{\"a\": 1,\n \"a\": 2}", Format::Auto).unwrap_err();
        match err {
            LoadError::Parse { line, reason, .. } => {
                assert!(reason.contains("duplicate mapping key"));
                assert_eq!(line, Some(2));
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn multiple_yaml_documents_rejected() {
        let err = load_bytes(left("multi.yaml"), b"a: 1\n---\nb: 2\n", Format::Yaml).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn invalid_utf8_rejected() {
        let err = load_bytes(left("bin.yaml"), &[0xff, 0xfe, 0x00], Format::Yaml).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn load_file_detects_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.json");
        fs::write(&path, r#"{"z": 1, "a": 2}"#).unwrap();

        let doc = load_file(&path, Side::Right).unwrap();
        assert_eq!(doc.source().side, Side::Right);
        let keys: Vec<_> = doc.root().as_mapping().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn load_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(dir.path().join("nope.yaml"), Side::Left).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert!(err.is_not_found());
    }

    #[test]
    fn load_file_on_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(dir.path(), Side::Left).unwrap_err();
        assert!(err.is_not_found());
    }
}
