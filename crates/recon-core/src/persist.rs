//! Backup-then-write persistence for changed content

use recon_fs::{NormalizedPath, backup_file, io};

use crate::{Error, Result};

/// Write `final_text` to `path`, optionally backing up the current file.
///
/// Order matters: the parent directory is checked (and created if
/// allowed), then the backup is taken, then the new content is written
/// atomically. A failed backup aborts before the target is touched.
/// Returns the backup path if one was created.
pub fn persist(
    path: &NormalizedPath,
    final_text: &str,
    backup: bool,
    create_dirs: bool,
) -> Result<Option<NormalizedPath>> {
    io::ensure_parent_dir(path, create_dirs).map_err(|e| match e {
        recon_fs::Error::MissingParent { parent } => Error::MissingDirectory {
            path: path.to_native(),
            parent,
        },
        source => Error::WriteFailed {
            path: path.to_native(),
            source,
        },
    })?;

    let backup_path = if backup && path.is_file() {
        let created = backup_file(path).map_err(|source| Error::BackupFailed {
            path: path.to_native(),
            source,
        })?;
        Some(created)
    } else {
        None
    };

    io::write_text(path, final_text).map_err(|source| Error::WriteFailed {
        path: path.to_native(),
        source,
    })?;
    tracing::info!(%path, bytes = final_text.len(), "Wrote reconciled content");

    Ok(backup_path)
}
