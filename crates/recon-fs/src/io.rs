//! Atomic I/O operations

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read raw bytes from a file, returning `None` when it does not exist.
///
/// Decoding is left to the caller so undecodable content can be told apart
/// from I/O failures.
pub fn read_bytes_if_exists(path: &NormalizedPath) -> Result<Option<Vec<u8>>> {
    let native_path = path.to_native();
    match fs::read(&native_path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}

/// Make sure the parent directory of `path` exists.
///
/// Creates missing directories recursively when `create` is set, otherwise
/// fails with [`Error::MissingParent`]. Returns `true` if directories were
/// created.
pub fn ensure_parent_dir(path: &NormalizedPath, create: bool) -> Result<bool> {
    let Some(parent) = path.parent() else {
        return Ok(false);
    };
    if parent.is_dir() {
        return Ok(false);
    }
    if !create {
        return Err(Error::MissingParent {
            parent: parent.to_native(),
        });
    }

    let native_parent = parent.to_native();
    fs::create_dir_all(&native_parent).map_err(|e| Error::io(&native_parent, e))?;
    tracing::debug!(path = %parent, "Created parent directory");
    Ok(true)
}

/// Write content atomically to a file.
///
/// Uses write-to-temp-then-rename so readers observe either the old content
/// or the new content, never a partial file. The parent directory must
/// already exist (see [`ensure_parent_dir`]). When the target exists its
/// permissions are carried over to the new file.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();
    let file_name = path.file_name().ok_or_else(|| Error::NoFileName {
        path: native_path.clone(),
    })?;

    // Same directory keeps the rename on one filesystem
    let temp_path = path
        .sibling(&format!(".{}.{}.tmp", file_name, std::process::id()))
        .to_native();

    let result = (|| {
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| Error::io(&temp_path, e))?;

        temp_file
            .write_all(content)
            .map_err(|e| Error::io(&temp_path, e))?;
        temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;
        drop(temp_file);

        if let Ok(metadata) = fs::metadata(&native_path) {
            fs::set_permissions(&temp_path, metadata.permissions())
                .map_err(|e| Error::io(&temp_path, e))?;
        }

        fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))
    })();

    if result.is_err() && temp_path.exists() {
        if let Err(e) = fs::remove_file(&temp_path) {
            tracing::warn!(path = %temp_path.display(), error = %e, "Failed to remove temp file");
        }
    }

    result
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
