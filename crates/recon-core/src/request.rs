//! Input to one reconciliation run

use recon_content::{Format, Mapping};
use recon_fs::NormalizedPath;

use crate::state::State;

/// Flags controlling side effects of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Copy the original to a timestamped sibling before overwriting it
    pub backup: bool,
    /// Create missing parent directories of the target
    pub create_dirs: bool,
    /// Evaluate the change without touching the filesystem
    pub dry_run: bool,
    /// Include a unified diff of the change in the outcome
    pub diff: bool,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            backup: false,
            create_dirs: true,
            dry_run: false,
            diff: false,
        }
    }
}

/// A complete, validated request for one run.
///
/// `format_hint` is only consulted when the target has no content to
/// detect a format from.
#[derive(Debug, Clone)]
pub struct ReconcileRequest {
    pub path: NormalizedPath,
    pub state: State,
    /// Values to merge for [`State::Present`]
    pub desired: Mapping,
    /// Keys to delete for [`State::Absent`]
    pub removal: Mapping,
    pub format_hint: Option<Format>,
    pub options: ReconcileOptions,
}

impl ReconcileRequest {
    /// A request for `path` with default options and empty mappings
    pub fn new(path: impl Into<NormalizedPath>, state: State) -> Self {
        Self {
            path: path.into(),
            state,
            desired: Mapping::new(),
            removal: Mapping::new(),
            format_hint: None,
            options: ReconcileOptions::default(),
        }
    }

    /// Merge `desired` into the file at `path`
    pub fn present(path: impl Into<NormalizedPath>, desired: Mapping) -> Self {
        Self::new(path, State::Present).with_desired(desired)
    }

    /// Remove the keys named by `removal` from the file at `path`
    pub fn absent(path: impl Into<NormalizedPath>, removal: Mapping) -> Self {
        Self::new(path, State::Absent).with_removal(removal)
    }

    /// Clear the file at `path`
    pub fn empty(path: impl Into<NormalizedPath>) -> Self {
        Self::new(path, State::Empty)
    }

    pub fn with_desired(mut self, desired: Mapping) -> Self {
        self.desired = desired;
        self
    }

    pub fn with_removal(mut self, removal: Mapping) -> Self {
        self.removal = removal;
        self
    }

    pub fn with_format_hint(mut self, format: Option<Format>) -> Self {
        self.format_hint = format;
        self
    }

    pub fn with_options(mut self, options: ReconcileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_backup(mut self, backup: bool) -> Self {
        self.options.backup = backup;
        self
    }

    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.options.create_dirs = create_dirs;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.options.dry_run = dry_run;
        self
    }

    pub fn with_diff(mut self, diff: bool) -> Self {
        self.options.diff = diff;
        self
    }
}
