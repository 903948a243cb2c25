//! Content codecs for recon
//!
//! Parses JSON and YAML documents into a [`Mapping`], renders mappings back
//! to canonical text (sorted keys, stable layout) and produces textual diffs.

pub mod diff;
pub mod error;
pub mod format;
pub mod handlers;
pub mod mapping;

pub use diff::unified_diff;
pub use error::{Error, Result};
pub use format::{Format, FormatHandler};
pub use handlers::{JsonHandler, YamlHandler};
pub use mapping::{Mapping, Value};
