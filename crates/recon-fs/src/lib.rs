//! Filesystem primitives for recon
//!
//! Provides home-aware path handling, atomic writes, content checksums
//! and timestamped sibling backups.

pub mod backup;
pub mod checksum;
pub mod error;
pub mod io;
pub mod path;

pub use backup::backup_file;
pub use checksum::{compute_content_checksum, compute_md5sum};
pub use error::{Error, Result};
pub use path::NormalizedPath;
