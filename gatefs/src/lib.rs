//! A read-only virtual filesystem over an explicit whitelist of local files.
//! Callers register the absolute paths they trust together with a base
//! directory; consumers then address those files by names relative to the
//! base, and nothing outside the whitelist or the base can be reached.

/// Error type shared by the whole crate.
pub mod error;
/// Helpers for discovering candidate files on disk.
pub mod fs;
/// Serializable description of a registry.
pub mod manifest;
/// Normalization of the names handed to lookups and listings.
pub mod path;
/// The whitelist registry and its lazily opened files.
pub mod registry;
/// Summaries over the files a registry exposes.
pub mod stats;
/// A printable directory tree built from listed names.
pub mod tree;

pub use error::{GateFsError, Result};
pub use manifest::Manifest;
pub use registry::{FileStatus, LazyFile, PathRegistry};
