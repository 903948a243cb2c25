//! Change detection by checksum comparison

use recon_content::{Format, Mapping};
use recon_fs::{NormalizedPath, checksum::compute_content_checksum};

use crate::{Error, Result};

/// Rendered candidate and whether it differs from the original
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Candidate rendered in the output format
    pub final_text: String,
    /// Checksum of the original text
    pub original_checksum: String,
    /// Checksum of `final_text`
    pub final_checksum: String,
    pub changed: bool,
}

/// Render `candidate` as `format` and compare it with `original`.
///
/// Rendering is canonical, so two structurally equal mappings always
/// produce the same checksum.
pub fn evaluate(
    path: &NormalizedPath,
    original: &str,
    candidate: &Mapping,
    format: Format,
) -> Result<Evaluation> {
    let final_text = format.render(candidate).map_err(|source| Error::RenderFailed {
        path: path.to_native(),
        source,
    })?;

    let original_checksum = compute_content_checksum(original);
    let final_checksum = compute_content_checksum(&final_text);
    let changed = original_checksum != final_checksum;

    tracing::debug!(
        %path,
        %format,
        changed,
        original = %original_checksum,
        rendered = %final_checksum,
        "Evaluated candidate"
    );

    Ok(Evaluation {
        final_text,
        original_checksum,
        final_checksum,
        changed,
    })
}
