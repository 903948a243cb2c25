//! Reports handed back to the caller

use recon_content::Format;
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};
use crate::state::State;

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Target path after home expansion
    pub file_path: String,
    pub changed: bool,
    /// MD5 hex digest of the content found before the run
    pub md5sum: String,
    /// Backup created before overwriting, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_file: Option<String>,
    /// Format the content was rendered in
    pub format: Format,
    pub state: State,
    /// True when the filesystem was deliberately left untouched
    pub dry_run: bool,
    /// Unified diff of the change, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
    /// The rendered content the file holds (or would hold) after the run
    #[serde(skip)]
    pub final_text: String,
}

/// Structured report of a failed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    pub failed: bool,
    pub kind: ErrorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    pub msg: String,
}

impl From<&Error> for FailureReport {
    fn from(error: &Error) -> Self {
        Self {
            failed: true,
            kind: error.kind(),
            file_path: error.path().map(|p| p.display().to_string()),
            msg: error.to_string(),
        }
    }
}
