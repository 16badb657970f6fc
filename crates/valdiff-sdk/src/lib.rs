//! High-level valdiff API.
//!
//! Ties the loader, differ, flattener and release sources into the two
//! runs the tool offers:
//!
//! - [`compare_release`] -- a release revision against a values file
//! - [`compare_files`] -- two local documents
//!
//! Both return a [`Report`] and, in [`OutputMode::Yaml`], write the change
//! set to the configured path.

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{OutputMode, RunConfig};
pub use error::{SdkError, SdkResult};
pub use pipeline::{compare_files, compare_release, Report};

pub use valdiff_changeset::ChangeSet;
pub use valdiff_diff::{DiffOptions, Difference, DifferenceKind, DocumentDiff};
pub use valdiff_release::{HelmCliSource, InMemoryReleaseSource, KubeSettings, ReleaseSource};
pub use valdiff_types::{Node, Scalar};
