//! Change sets for valdiff.
//!
//! A [`ChangeSet`] is the flattened form of a structural diff: one entry per
//! value change, keyed by the dotted path and holding the previous value.
//! It is meant to be re-applied as a values override file.
//!
//! - [`flatten`] -- differences to change set
//! - [`to_yaml`] / [`from_yaml`] -- YAML encoding in insertion order
//! - [`write_atomic`] -- all-or-nothing output file write

pub mod changeset;
pub mod error;
pub mod serialize;

pub use changeset::{flatten, ChangeSet};
pub use error::{ChangeSetError, ChangeSetResult};
pub use serialize::{from_yaml, to_yaml, write_atomic};
