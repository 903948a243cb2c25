//! Error types for recon-core

use std::path::{Path, PathBuf};

use recon_content::Format;
use serde::{Deserialize, Serialize};

/// Result type for recon-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Category of a failed run, reported to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ParseError,
    UndeterminedFormat,
    UnsupportedState,
    MissingDirectory,
    BackupFailed,
    WriteFailed,
    ReadFailed,
    RenderFailed,
}

/// Errors that can occur during a reconciliation run
///
/// Every variant is terminal for the run. Variants up to and including
/// `RenderFailed` are raised before the filesystem is touched.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Existing content could not be decoded
    #[error("{path}: {source}")]
    Parse {
        path: PathBuf,
        format: Format,
        #[source]
        source: recon_content::Error,
    },

    /// No file to detect from and no format hint
    #[error("Cannot determine format for {path}: file does not exist and no format was given")]
    UndeterminedFormat { path: PathBuf },

    /// State value outside present/absent/empty
    #[error("Unsupported state '{state}' (expected present, absent or empty)")]
    UnsupportedState { state: String },

    /// Parent directory missing and creation disallowed
    #[error("Parent directory {parent} of {path} does not exist")]
    MissingDirectory { path: PathBuf, parent: PathBuf },

    /// Existing file could not be read
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: recon_fs::Error,
    },

    /// Candidate mapping could not be rendered
    #[error("Failed to render {path}: {source}")]
    RenderFailed {
        path: PathBuf,
        #[source]
        source: recon_content::Error,
    },

    /// Requested backup could not be created; the target was not written
    #[error("Failed to back up {path}: {source}")]
    BackupFailed {
        path: PathBuf,
        #[source]
        source: recon_fs::Error,
    },

    /// New content could not be written; the original is intact
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: recon_fs::Error,
    },
}

impl Error {
    /// The reportable category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse { .. } => ErrorKind::ParseError,
            Self::UndeterminedFormat { .. } => ErrorKind::UndeterminedFormat,
            Self::UnsupportedState { .. } => ErrorKind::UnsupportedState,
            Self::MissingDirectory { .. } => ErrorKind::MissingDirectory,
            Self::ReadFailed { .. } => ErrorKind::ReadFailed,
            Self::RenderFailed { .. } => ErrorKind::RenderFailed,
            Self::BackupFailed { .. } => ErrorKind::BackupFailed,
            Self::WriteFailed { .. } => ErrorKind::WriteFailed,
        }
    }

    /// The target path the error refers to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::UnsupportedState { .. } => None,
            Self::Parse { path, .. }
            | Self::UndeterminedFormat { path }
            | Self::MissingDirectory { path, .. }
            | Self::ReadFailed { path, .. }
            | Self::RenderFailed { path, .. }
            | Self::BackupFailed { path, .. }
            | Self::WriteFailed { path, .. } => Some(path.as_path()),
        }
    }
}
