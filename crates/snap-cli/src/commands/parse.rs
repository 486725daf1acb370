//! Parse captured files with a registered parser

use std::path::PathBuf;

use serde::Serialize;
use snap_context::NormalizedPath;
use snap_context::io::read_context;
use snap_parsers::{HttpdSettings, Parsed, builtins};

use crate::commands::print_json;
use crate::error::{CliError, Result};

#[derive(Debug, Serialize)]
struct ParseOutput {
    file: String,
    result: Parsed,
}

/// Run the parse command
pub fn run_parse(spec: &str, files: &[PathBuf], settings: &HttpdSettings) -> Result<()> {
    let registry = builtins();
    if !registry.has_parser(spec) {
        return Err(CliError::UnknownParser {
            spec: spec.to_string(),
        });
    }

    let mut outputs = Vec::with_capacity(files.len());
    for file in files {
        let path = NormalizedPath::new(file);
        let context = read_context(&path)?;
        let result = registry
            .parse(spec, &context, settings)
            .ok_or_else(|| CliError::UnknownParser {
                spec: spec.to_string(),
            })?;
        outputs.push(ParseOutput {
            file: path.to_string(),
            result,
        });
    }

    print_json(&outputs)
}
