//! CLI error types.

use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
///
/// Rendering itself never fails; these cover the boundaries around it.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the events file or stdin failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The events input was not a valid JSON array of events.
    #[error("invalid events JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The settings file could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Tracing setup failed.
    #[error("tracing setup failed: {0}")]
    Tracing(#[from] eventmark_core::TracingError),
}
