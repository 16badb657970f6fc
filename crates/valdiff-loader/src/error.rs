//! Error types for the loader crate.

use std::path::PathBuf;

use valdiff_types::SourceId;

/// Errors that can occur while loading a document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The input file does not exist.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The input file exists but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input is not well-formed YAML or JSON, or uses a construct the
    /// tree model cannot hold (non-scalar keys, colliding keys).
    #[error("parse error in {document}{}: {reason}", location(.line, .column))]
    Parse {
        document: SourceId,
        line: Option<usize>,
        column: Option<usize>,
        reason: String,
    },
}

impl LoadError {
    /// A parse error without position information.
    pub fn parse(document: &SourceId, reason: impl Into<String>) -> Self {
        Self::Parse {
            document: document.clone(),
            line: None,
            column: None,
            reason: reason.into(),
        }
    }

    /// Returns `true` for the not-found/unreadable category.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Unreadable { .. })
    }
}

fn location(line: &Option<usize>, column: &Option<usize>) -> String {
    match (line, column) {
        (Some(l), Some(c)) => format!(" at line {l}, column {c}"),
        (Some(l), None) => format!(" at line {l}"),
        _ => String::new(),
    }
}

/// Convenience alias for loader results.
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display_with_location() {
        let err = LoadError::Parse {
            document: SourceId::right("values.yaml"),
            line: Some(3),
            column: Some(7),
            reason: "unexpected ':'".into(),
        };
        assert_eq!(
            err.to_string(),
            "parse error in right (values.yaml) at line 3, column 7: unexpected ':'"
        );
    }

    #[test]
    fn parse_error_display_without_location() {
        let err = LoadError::parse(&SourceId::left("a.json"), "bad key");
        assert_eq!(err.to_string(), "parse error in left (a.json): bad key");
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_category() {
        let err = LoadError::NotFound { path: "missing.yaml".into() };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "file not found: missing.yaml");
    }
}
