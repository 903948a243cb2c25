//! Error types for recon-cli

use recon_core::FailureReport;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the reconciliation run
    #[error(transparent)]
    Core(#[from] recon_core::Error),

    /// Desired keys could not be parsed
    #[error("Invalid input: {0}")]
    Input(#[from] recon_content::Error),

    /// Desired-keys file could not be read
    #[error(transparent)]
    Fs(#[from] recon_fs::Error),

    /// Report could not be serialized
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Logging could not be initialized
    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Structured report for failures of the run itself
    pub fn failure_report(&self) -> Option<FailureReport> {
        match self {
            Self::Core(e) => Some(FailureReport::from(e)),
            _ => None,
        }
    }
}
