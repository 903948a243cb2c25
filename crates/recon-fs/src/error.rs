//! Error types for recon-fs

use std::path::PathBuf;

/// Result type for recon-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in recon-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parent directory {parent} does not exist")]
    MissingParent { parent: PathBuf },

    #[error("Path has no file name: {path}")]
    NoFileName { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
