//! Release sources for valdiff.
//!
//! A release source returns the values a Helm release was deployed with at a
//! given revision. The diff core treats the result as an ordinary document.
//!
//! # Sources
//!
//! All sources implement the [`ReleaseSource`] trait:
//!
//! - [`InMemoryReleaseSource`] -- revision history held in memory, for tests and embedding
//! - [`HelmCliSource`] -- runs the `helm` client against a cluster
//!
//! [`resolve_revision`] turns a requested revision (0 = previous) into a
//! concrete revision number.

pub mod error;
pub mod helm;
pub mod memory;
pub mod revision;
pub mod settings;
pub mod traits;

pub use error::{ReleaseError, ReleaseResult};
pub use helm::HelmCliSource;
pub use memory::InMemoryReleaseSource;
pub use revision::resolve_revision;
pub use settings::KubeSettings;
pub use traits::ReleaseSource;
