//! Error types for recon-content

/// Result type for recon-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in recon-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse {format} content: {message}")]
    ParseError { format: String, message: String },

    #[error("Failed to render {format} content: {message}")]
    RenderError { format: String, message: String },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl Error {
    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            format: format.into(),
            message: message.into(),
        }
    }

    pub fn render(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RenderError {
            format: format.into(),
            message: message.into(),
        }
    }
}
