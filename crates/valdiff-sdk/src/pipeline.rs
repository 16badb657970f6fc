use std::path::{Path, PathBuf};

use tracing::info;
use valdiff_changeset::{flatten, to_yaml, write_atomic, ChangeSet, ChangeSetError};
use valdiff_diff::{diff_with, DocumentDiff};
use valdiff_loader::load_file;
use valdiff_release::{resolve_revision, ReleaseSource};
use valdiff_types::{Document, Side, SourceId};

use crate::config::{OutputMode, RunConfig};
use crate::error::SdkResult;

/// Outcome of a comparison run.
#[derive(Clone, Debug)]
pub struct Report {
    pub left: SourceId,
    pub right: SourceId,
    /// The release revision compared against, for release runs.
    pub revision: Option<u32>,
    pub diff: DocumentDiff,
    pub changes: ChangeSet,
    /// The change set encoded as YAML.
    pub rendered: String,
    /// Set when the change set was written to disk.
    pub written_to: Option<PathBuf>,
}

/// Compare a release's historical values (left) against `config.values_file`
/// (right).
pub async fn compare_release(source: &dyn ReleaseSource, config: &RunConfig) -> SdkResult<Report> {
    let release = config.release.as_str();
    let current = source.current_version(release).await?;
    let revision = resolve_revision(release, config.revision, current)?;
    info!(release, current, revision, "fetching release values");

    let values = source.get_values(release, revision).await?;
    let left = Document::new(SourceId::left(format!("{release}@{revision}")), values);
    let right = load_file(&config.values_file, Side::Right)?;

    if let Some(path) = &config.snapshot_path {
        let snapshot = serde_yaml::to_string(left.root()).map_err(ChangeSetError::from)?;
        write_atomic(snapshot.as_bytes(), path)?;
    }

    let mut report = build_report(left, right, config)?;
    report.revision = Some(revision);
    Ok(report)
}

/// Compare two local documents.
pub fn compare_files(left: &Path, right: &Path, config: &RunConfig) -> SdkResult<Report> {
    let left = load_file(left, Side::Left)?;
    let right = load_file(right, Side::Right)?;
    build_report(left, right, config)
}

/// Diff, flatten and render; write the output last so a failure in any
/// earlier step leaves nothing on disk.
fn build_report(left: Document, right: Document, config: &RunConfig) -> SdkResult<Report> {
    let diff = diff_with(&left, &right, config.diff);
    let changes = flatten(&diff);
    let rendered = to_yaml(&changes)?;

    let written_to = match config.output {
        OutputMode::Yaml => {
            write_atomic(rendered.as_bytes(), &config.output_path)?;
            Some(config.output_path.clone())
        }
        OutputMode::Console => None,
    };

    info!(
        left = %left.source(),
        right = %right.source(),
        differences = diff.len(),
        changes = changes.len(),
        output = %config.output,
        "diff complete"
    );

    Ok(Report {
        left: left.source().clone(),
        right: right.source().clone(),
        revision: None,
        diff,
        changes,
        rendered,
        written_to,
    })
}
