//! Structural differ for valdiff.
//!
//! Compares two document trees node by node and produces an ordered list of
//! path-addressed differences. Comparison is infallible: every pair of node
//! kinds has a defined outcome.
//!
//! # Key Types
//!
//! - [`DocumentDiff`] / [`Difference`] / [`Detail`] -- The diff result
//! - [`DifferenceKind`] -- value-changed, key-added, key-removed, type-changed, order-changed
//! - [`DiffOptions`] -- Opt-in comparison policies

pub mod differ;
pub mod difference;

pub use difference::{Detail, Difference, DifferenceKind, DocumentDiff};
pub use differ::{diff, diff_nodes, diff_with, DiffOptions};
