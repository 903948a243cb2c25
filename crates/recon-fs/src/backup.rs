//! Timestamped sibling backups
//!
//! A backup of `settings.yaml` lands next to it as
//! `settings.yaml.<pid>.<YYYY-MM-DD@HH:MM:SS>~`. When that name is already
//! taken (two backups within one second) a counter is appended:
//! `settings.yaml.<pid>.<YYYY-MM-DD@HH:MM:SS>.1~`.

use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;

use chrono::Local;

use crate::{Error, NormalizedPath, Result};

/// Timestamp layout embedded in backup file names
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d@%H:%M:%S";

/// Give up after this many name collisions
const MAX_ATTEMPTS: u32 = 100;

/// Build the backup file name for `file_name` at the current time.
///
/// `attempt` 0 yields the plain name; later attempts add a counter.
pub fn backup_name(file_name: &str, attempt: u32) -> String {
    let stamp = Local::now().format(TIMESTAMP_FORMAT);
    let pid = std::process::id();
    if attempt == 0 {
        format!("{file_name}.{pid}.{stamp}~")
    } else {
        format!("{file_name}.{pid}.{stamp}.{attempt}~")
    }
}

/// Copy `path` to a new timestamped sibling and return the backup path.
///
/// The backup is created exclusively: an existing file is never
/// overwritten. Permissions of the original are preserved.
pub fn backup_file(path: &NormalizedPath) -> Result<NormalizedPath> {
    let source_path = path.to_native();
    let file_name = path.file_name().ok_or_else(|| Error::NoFileName {
        path: source_path.clone(),
    })?;

    let mut source = File::open(&source_path).map_err(|e| Error::io(&source_path, e))?;

    let mut attempt = 0;
    let (backup, mut dest) = loop {
        let candidate = path.sibling(&backup_name(file_name, attempt));
        let candidate_path = candidate.to_native();
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate_path)
        {
            Ok(file) => break (candidate, file),
            Err(e) if e.kind() == ErrorKind::AlreadyExists && attempt < MAX_ATTEMPTS => {
                attempt += 1;
            }
            Err(e) => return Err(Error::io(&candidate_path, e)),
        }
    };
    let backup_path = backup.to_native();

    let copied = std::io::copy(&mut source, &mut dest)
        .and_then(|_| dest.sync_all())
        .and_then(|()| source.metadata())
        .and_then(|metadata| fs::set_permissions(&backup_path, metadata.permissions()));

    if let Err(e) = copied {
        drop(dest);
        let _ = fs::remove_file(&backup_path);
        return Err(Error::io(&backup_path, e));
    }

    tracing::info!(original = %path, backup = %backup, "Created backup");
    Ok(backup)
}
