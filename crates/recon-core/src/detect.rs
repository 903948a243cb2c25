//! Format detection for the existing target file

use recon_content::{Format, Mapping};
use recon_fs::{NormalizedPath, io};

use crate::{Error, Result};

/// What was found at the target path
#[derive(Debug, Clone, PartialEq)]
pub struct Detected {
    /// Parsed content, empty if there was none
    pub mapping: Mapping,
    /// Format inferred from the content, `None` for a missing or blank file
    pub format: Option<Format>,
    /// Raw content as read, `None` if the file does not exist
    pub original: Option<String>,
}

impl Detected {
    /// Original text for checksumming; a missing file counts as empty
    pub fn original_text(&self) -> &str {
        self.original.as_deref().unwrap_or_default()
    }

    /// Resolve the output format: detected first, then the caller's hint.
    pub fn output_format(&self, path: &NormalizedPath, hint: Option<Format>) -> Result<Format> {
        self.format
            .or(hint)
            .ok_or_else(|| Error::UndeterminedFormat {
                path: path.to_native(),
            })
    }
}

/// Existing content that is not UTF-8 cannot be parsed in either format.
fn decode(path: &NormalizedPath, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        let format = Format::from_bytes(e.as_bytes()).unwrap_or(Format::Yaml);
        Error::Parse {
            path: path.to_native(),
            format,
            source: recon_content::Error::parse(
                format.name(),
                format!("content is not valid UTF-8: {}", e.utf8_error()),
            ),
        }
    })
}

/// Read `path` and parse it with the format its content indicates.
pub fn detect(path: &NormalizedPath) -> Result<Detected> {
    let bytes = io::read_bytes_if_exists(path).map_err(|source| Error::ReadFailed {
        path: path.to_native(),
        source,
    })?;
    let original = bytes.map(|b| decode(path, b)).transpose()?;

    let Some(content) = original.as_deref() else {
        tracing::debug!(%path, "Target does not exist");
        return Ok(Detected {
            mapping: Mapping::new(),
            format: None,
            original: None,
        });
    };

    let Some(format) = Format::from_content(content) else {
        tracing::debug!(%path, "Target is blank");
        return Ok(Detected {
            mapping: Mapping::new(),
            format: None,
            original,
        });
    };

    let mapping = format.parse(content).map_err(|source| Error::Parse {
        path: path.to_native(),
        format,
        source,
    })?;
    tracing::debug!(%path, %format, keys = mapping.len(), "Detected existing content");

    Ok(Detected {
        mapping,
        format: Some(format),
        original,
    })
}
