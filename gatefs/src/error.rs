use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GateFsError {
    /// The requested name could not be normalized to a path under the base.
    #[error("invalid path {path:?}: {reason}")]
    PathValidation { path: String, reason: &'static str },

    /// The normalized name is not part of the registry.
    #[error("file does not exist: {0}")]
    FileNotFound(String),

    #[error("failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to stat {}: {source}", path.display())]
    Stat { path: PathBuf, source: io::Error },

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// A read was attempted on a handle that has already been closed.
    #[error("file already closed: {}", .0.display())]
    Closed(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Manifest parse error: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl GateFsError {
    pub(crate) fn invalid_path(path: &str, reason: &'static str) -> Self {
        Self::PathValidation {
            path: path.to_string(),
            reason,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound(_))
    }

    pub fn is_path_validation(&self) -> bool {
        matches!(self, Self::PathValidation { .. })
    }
}

/// Lets [`crate::LazyFile`] plug into `std::io::Read` consumers.
impl From<GateFsError> for io::Error {
    fn from(e: GateFsError) -> Self {
        match e {
            GateFsError::PathValidation { .. } => io::Error::new(io::ErrorKind::InvalidInput, e),
            GateFsError::FileNotFound(_) => io::Error::new(io::ErrorKind::NotFound, e),
            GateFsError::Open { source, .. }
            | GateFsError::Stat { source, .. }
            | GateFsError::Read { source, .. } => source,
            GateFsError::Closed(_) => io::Error::other(e),
            GateFsError::Io(e) => e,
            GateFsError::Manifest(e) => io::Error::new(io::ErrorKind::InvalidData, e),
        }
    }
}

pub type Result<T> = std::result::Result<T, GateFsError>;
