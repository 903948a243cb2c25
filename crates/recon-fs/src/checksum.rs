//! Content digests
//!
//! `sha256:<hex>` checksums compare original and rendered content. The
//! plain MD5 hex digest of the original is what callers see in reports.

use md5::Md5;
use sha2::{Digest, Sha256};

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Compute the SHA-256 checksum of string content.
///
/// Returns a string in the canonical format `"sha256:<hex>"`.
pub fn compute_content_checksum(content: &str) -> String {
    compute_bytes_checksum(content.as_bytes())
}

/// Compute the SHA-256 checksum of raw bytes.
pub fn compute_bytes_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// MD5 hex digest of string content, without a prefix.
pub fn compute_md5sum(content: &str) -> String {
    format!("{:x}", Md5::digest(content.as_bytes()))
}
