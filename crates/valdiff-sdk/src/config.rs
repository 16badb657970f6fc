use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use valdiff_diff::DiffOptions;

/// Where a run's change set goes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Write the change set as YAML to the configured output path.
    Yaml,
    /// Print a summary to the console; nothing is written to disk.
    #[default]
    Console,
}

impl OutputMode {
    /// `"yaml"` (any case) selects file output; every other value selects
    /// the console.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("yaml") {
            Self::Yaml
        } else {
            Self::Console
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => f.write_str("yaml"),
            Self::Console => f.write_str("console"),
        }
    }
}

/// Parameters of a single comparison run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Release name, for release comparisons.
    pub release: String,
    /// Requested revision; 0 selects the revision before the latest.
    pub revision: u32,
    /// Values file compared against the release.
    pub values_file: PathBuf,
    pub output: OutputMode,
    /// Destination of the YAML change set in [`OutputMode::Yaml`].
    pub output_path: PathBuf,
    /// When set, the fetched release values are also written here as YAML.
    pub snapshot_path: Option<PathBuf>,
    pub diff: DiffOptions,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            release: String::new(),
            revision: 0,
            values_file: PathBuf::from("values.yaml"),
            output: OutputMode::Console,
            output_path: PathBuf::from("generated-values.yaml"),
            snapshot_path: None,
            diff: DiffOptions::default(),
        }
    }
}
