//! The whitelist registry and the lazily opened files it hands out.

pub mod file;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{GateFsError, Result};
use crate::manifest::Manifest;
use crate::path::{clean_relative_path, relative_to_base};

/// Re-export of the lazily opened file handle.
pub use file::{FileStatus, LazyFile};

/// A read-only view over an explicit set of files, addressed relative to a
/// base directory.
///
/// The set of registered paths is fixed at construction. Lookups never
/// touch the disk; the file behind a handle is opened on its first read.
#[derive(Debug)]
pub struct PathRegistry {
    entries: HashMap<PathBuf, LazyFile>,
    base: PathBuf,
}

impl PathRegistry {
    /// Register `paths` under `base`.
    ///
    /// Registered paths are taken as given and are not normalized. Paths
    /// outside `base` are kept but can neither be listed nor opened.
    pub fn new<I, P>(paths: I, base: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let base = base.into();
        let entries: HashMap<PathBuf, LazyFile> = paths
            .into_iter()
            .map(Into::into)
            .map(|path: PathBuf| (path.clone(), LazyFile::new(path)))
            .collect();
        debug!(base = %base.display(), entries = entries.len(), "built path registry");

        Self { entries, base }
    }

    /// Register every regular file found below `base`.
    pub fn from_dir<P: AsRef<Path>>(base: P) -> Result<Self> {
        let base = base.as_ref();
        let files = crate::fs::collect_files(base)?;
        Ok(Self::new(files, base))
    }

    /// Look up `name` relative to the base.
    ///
    /// The name is normalized before anything else, so traversal outside
    /// the base fails with [`GateFsError::PathValidation`] without reaching
    /// the map. Names that normalize fine but were never registered fail
    /// with [`GateFsError::FileNotFound`].
    pub fn open(&self, name: &str) -> Result<&LazyFile> {
        let cleaned = clean_relative_path(name).inspect_err(|e| {
            debug!(requested = name, error = %e, "rejected lookup");
        })?;

        let key = self.base.join(cleaned);
        match self.entries.get(&key) {
            Some(file) => {
                trace!(requested = name, path = %key.display(), "resolved lookup");
                Ok(file)
            }
            None => {
                debug!(requested = name, path = %key.display(), "lookup for unregistered path");
                Err(GateFsError::FileNotFound(name.to_string()))
            }
        }
    }

    /// Whether `name` would resolve through [`PathRegistry::open`].
    pub fn contains(&self, name: &str) -> bool {
        self.open(name).is_ok()
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Names of all registered files relative to the base, in no particular
    /// order.
    ///
    /// Registered paths that are not under the base are left out, so every
    /// name returned here can be passed back to [`PathRegistry::open`].
    pub fn files(&self) -> Vec<String> {
        self.iter().map(|(name, _)| name).collect()
    }

    /// [`PathRegistry::files`], sorted.
    pub fn sorted_files(&self) -> Vec<String> {
        let mut files = self.files();
        files.sort();
        files
    }

    /// Listed names together with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (String, &LazyFile)> + '_ {
        self.entries.iter().filter_map(|(path, file)| {
            let name = relative_to_base(path, &self.base);
            if name.is_none() {
                trace!(path = %path.display(), "registered path is not listable");
            }
            name.map(|name| (name, file))
        })
    }

    /// Number of registered paths, listable or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Describe the listable part of this registry as a manifest.
    pub fn manifest(&self) -> Manifest {
        Manifest {
            base: self.base.clone(),
            files: self.sorted_files().into_iter().map(PathBuf::from).collect(),
        }
    }
}
