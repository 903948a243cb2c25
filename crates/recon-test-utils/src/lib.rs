//! Shared test utilities for the recon workspace.
//!
//! This crate provides a sandbox directory for reconciliation scenarios.
//! It is a dev-dependency only, never published.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tempfile::TempDir;

/// Build a mapping from a `serde_json::json!` literal.
///
/// # Panics
///
/// Panics if `value` is not an object.
pub fn mapping(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a mapping literal, got {other}"),
    }
}

/// A temporary directory holding config files under test.
///
/// # Example
///
/// ```rust,no_run
/// use recon_test_utils::TestConfigDir;
///
/// let dir = TestConfigDir::new();
/// let path = dir.write("app.yaml", "name: app\n");
/// dir.assert_content("app.yaml", "name: app\n");
/// assert_eq!(dir.backups("app.yaml").len(), 0);
/// # let _ = path;
/// ```
pub struct TestConfigDir {
    temp_dir: TempDir,
}

impl Default for TestConfigDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfigDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the directory (not created).
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Read `relative` as text.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("failed to read {relative}: {e}"))
    }

    /// Assert that `relative` holds exactly `expected`.
    pub fn assert_content(&self, relative: &str, expected: &str) {
        assert_eq!(self.read(relative), expected, "content of {relative}");
    }

    /// Assert that `relative` does not exist.
    pub fn assert_missing(&self, relative: &str) {
        let path = self.path(relative);
        assert!(!path.exists(), "expected {} to be missing", path.display());
    }

    /// Backup files created next to `relative`, sorted by name.
    pub fn backups(&self, relative: &str) -> Vec<PathBuf> {
        let path = self.path(relative);
        let (Some(dir), Some(name)) = (path.parent(), path.file_name()) else {
            return Vec::new();
        };
        let prefix = format!("{}.", name.to_string_lossy());

        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut backups: Vec<_> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy())
                    .is_some_and(|n| n.starts_with(&prefix) && n.ends_with('~'))
            })
            .collect();
        backups.sort();
        backups
    }

    /// Number of directory entries directly under the root.
    pub fn entry_count(&self) -> usize {
        fs::read_dir(self.root()).unwrap().count()
    }
}
