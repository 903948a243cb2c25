//! Format detection and handler trait

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::handlers::{JsonHandler, YamlHandler};
use crate::mapping::Mapping;

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Detect format from content.
    ///
    /// Content whose first non-whitespace character is `{` or `[` is JSON,
    /// anything else is YAML. Blank content has no format.
    pub fn from_content(content: &str) -> Option<Self> {
        match content.trim_start().chars().next() {
            None => None,
            Some('{' | '[') => Some(Self::Json),
            Some(_) => Some(Self::Yaml),
        }
    }

    /// [`Format::from_content`] for content that may not be valid UTF-8.
    pub fn from_bytes(content: &[u8]) -> Option<Self> {
        match content.iter().find(|b| !b.is_ascii_whitespace()) {
            None => None,
            Some(b'{' | b'[') => Some(Self::Json),
            Some(_) => Some(Self::Yaml),
        }
    }

    /// Human-readable name used in messages
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    /// The handler implementing this format
    pub fn handler(&self) -> &'static dyn FormatHandler {
        match self {
            Self::Json => &JsonHandler,
            Self::Yaml => &YamlHandler,
        }
    }

    /// Parse `source` with this format's handler.
    pub fn parse(&self, source: &str) -> Result<Mapping> {
        self.handler().parse(source)
    }

    /// Render `mapping` with this format's handler.
    pub fn render(&self, mapping: &Mapping) -> Result<String> {
        self.handler().render(mapping)
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

/// Trait for format-specific handlers
pub trait FormatHandler: Send + Sync {
    /// Format identifier
    fn format(&self) -> Format;

    /// Parse source into a mapping
    fn parse(&self, source: &str) -> Result<Mapping>;

    /// Render a mapping to canonical text.
    ///
    /// Output must be identical for structurally equal mappings.
    fn render(&self, mapping: &Mapping) -> Result<String>;
}
