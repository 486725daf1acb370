//! Error types for snap-parsers
//!
//! Parsers themselves never return these: they only surface from the
//! decoding helpers, and the parsers turn them into empty results.

/// Result type for snap-parsers decoding helpers
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse {format} content: {message}")]
    ParseError { format: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            format: format.into(),
            message: message.into(),
        }
    }
}
