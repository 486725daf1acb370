//! Captured input handed to a parser

use crate::path::NormalizedPath;

/// The raw content of one captured command or file, plus where it came from.
///
/// Content is kept pre-split into lines. The path is optional: command
/// output usually has none, configuration files always do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    content: Vec<String>,
    path: Option<NormalizedPath>,
}

impl Context {
    /// Create a context from already-split lines.
    pub fn new(content: Vec<String>) -> Self {
        Self {
            content,
            path: None,
        }
    }

    /// Create a context by splitting `text` into lines.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(str::to_string).collect())
    }

    /// Attach the originating path.
    pub fn with_path(mut self, path: impl Into<NormalizedPath>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    pub fn path(&self) -> Option<&NormalizedPath> {
        self.path.as_ref()
    }

    /// File name of the originating path, if any.
    pub fn file_name(&self) -> Option<&str> {
        self.path.as_ref().and_then(NormalizedPath::file_name)
    }

    /// Full originating path, if any.
    pub fn file_path(&self) -> Option<&str> {
        self.path.as_ref().map(NormalizedPath::as_str)
    }

    /// Content re-joined with newlines, for parsers that need the whole text.
    pub fn joined(&self) -> String {
        self.content.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
