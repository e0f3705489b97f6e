use std::path::PathBuf;

use gatefs::{Manifest, PathRegistry};
use tracing::debug;

use crate::config;
use crate::error::{GateFsCliError, Result};

pub mod cat;
pub mod files;
pub mod scan;
pub mod stat;
pub mod stats;
pub mod tree;

/// Where the whitelist for a command comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    /// Every regular file below a directory.
    Dir(PathBuf),
    /// A manifest previously written by `gatefs scan`.
    Manifest(PathBuf),
}

impl RegistrySource {
    pub fn resolve(dir: Option<PathBuf>, manifest: Option<PathBuf>) -> Self {
        match (dir, manifest) {
            (Some(dir), _) => Self::Dir(dir),
            (None, Some(manifest)) => Self::Manifest(manifest),
            (None, None) => Self::Manifest(config::get_manifest_path()),
        }
    }

    /// Build a fresh registry. Handles are single use, so every command
    /// loads its own.
    pub fn load(&self) -> Result<PathRegistry> {
        debug!(source = ?self, "loading registry");
        match self {
            Self::Dir(dir) => Ok(PathRegistry::from_dir(dir)?),
            Self::Manifest(path) => {
                if !path.exists() {
                    return Err(GateFsCliError::Input(format!(
                        "Manifest {} not found, run 'gatefs scan <DIR>' first",
                        path.display()
                    )));
                }
                Ok(Manifest::load(path)?.into_registry())
            }
        }
    }
}
