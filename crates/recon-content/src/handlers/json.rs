//! JSON format handler

use serde_json::Value;

use crate::error::{Error, Result};
use crate::format::{Format, FormatHandler};
use crate::mapping::{self, Mapping};

const NAME: &str = Format::Json.name();

/// Handler for JSON files
#[derive(Debug, Default)]
pub struct JsonHandler;

impl JsonHandler {
    pub fn new() -> Self {
        Self
    }
}

impl FormatHandler for JsonHandler {
    fn format(&self) -> Format {
        Format::Json
    }

    fn parse(&self, source: &str) -> Result<Mapping> {
        let value: Value =
            serde_json::from_str(source).map_err(|e| Error::parse(NAME, e.to_string()))?;
        mapping::into_mapping(value, NAME)
    }

    fn render(&self, mapping: &Mapping) -> Result<String> {
        let canonical = mapping::canonical_mapping(mapping);
        let mut rendered = serde_json::to_string_pretty(&canonical)
            .map_err(|e| Error::render(NAME, e.to_string()))?;
        rendered.push('\n');
        Ok(rendered)
    }
}
