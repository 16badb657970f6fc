//! Document loader for valdiff.
//!
//! Reads a file or byte stream, detects whether it is YAML or JSON, and
//! builds a [`Document`](valdiff_types::Document) tree. Loading has no side
//! effects beyond reading the input.
//!
//! - [`load_file`] -- load from a path; a `.json` extension selects JSON
//! - [`load_bytes`] -- load from memory with an explicit [`Format`]

mod convert;
pub mod error;
pub mod loader;

pub use error::{LoadError, LoadResult};
pub use loader::{load_bytes, load_file, Format};
