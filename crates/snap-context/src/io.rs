//! Reading snapshot inputs from disk

use std::fs;

use crate::{Context, Error, NormalizedPath, Result};

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read a file into a [`Context`] tagged with its path.
pub fn read_context(path: &NormalizedPath) -> Result<Context> {
    let text = read_text(path)?;
    tracing::debug!(path = %path, lines = text.lines().count(), "Read snapshot input");
    Ok(Context::from_text(&text).with_path(path.clone()))
}
