//! YAML encoding of change sets and atomic output writes.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::changeset::ChangeSet;
use crate::error::{ChangeSetError, ChangeSetResult};

/// Encode a change set as a flat YAML mapping in insertion order.
///
/// An empty change set encodes as `{}`.
pub fn to_yaml(changes: &ChangeSet) -> ChangeSetResult<String> {
    Ok(serde_yaml::to_string(changes)?)
}

/// Decode a change set previously produced by [`to_yaml`].
pub fn from_yaml(text: &str) -> ChangeSetResult<ChangeSet> {
    Ok(serde_yaml::from_str(text)?)
}

/// Write `bytes` to `path` so that either the whole content lands or nothing
/// does.
///
/// Data goes to a temporary file in the destination directory which is then
/// renamed over `path`. On any failure the temporary file is removed when it
/// is dropped and `path` is left untouched.
pub fn write_atomic(bytes: &[u8], path: &Path) -> ChangeSetResult<()> {
    let io_err = |source: std::io::Error| ChangeSetError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(io_err)?;
    file.write_all(bytes).map_err(io_err)?;
    file.as_file().sync_all().map_err(io_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(io_err)?;
    }

    file.persist(path).map_err(|e| io_err(e.error))?;
    info!(path = %path.display(), len = bytes.len(), "change set written");
    Ok(())
}
