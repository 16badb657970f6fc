//! Foundation types for valdiff.
//!
//! Every other valdiff crate depends on `valdiff-types`. The model is a plain
//! tree of semantic nodes, independent of whether the input was YAML or JSON.
//!
//! # Key Types
//!
//! - [`Node`] -- Mapping, sequence or scalar
//! - [`Scalar`] / [`Number`] -- Closed leaf value set
//! - [`Path`] / [`PathElement`] -- Location of a node from the document root
//! - [`Document`] / [`SourceId`] -- A parsed tree and where it came from

pub mod document;
pub mod node;
pub mod path;

pub use document::{Document, Side, SourceId};
pub use node::{Node, NodeKind, Number, Scalar};
pub use path::{Path, PathElement};
