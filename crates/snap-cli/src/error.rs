//! Error types for snap-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// No parser registered for the command identifier
    #[error("Unknown command identifier '{spec}' (run 'snap list' for options)")]
    UnknownParser { spec: String },

    /// Error reading inputs or settings
    #[error(transparent)]
    Context(#[from] snap_context::Error),

    /// Error writing JSON output
    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}
