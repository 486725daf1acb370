//! Combine httpd configuration files and query the merged view

use std::path::PathBuf;

use snap_combiners::{HttpdConfAll, SectionQuery};
use snap_context::NormalizedPath;
use snap_context::io::read_context;
use snap_parsers::{HttpdConf, HttpdSettings};

use crate::commands::print_json;
use crate::error::Result;

/// What to look up in the merged configuration.
#[derive(Debug, Clone, Default)]
pub struct HttpdLookup {
    pub directive: String,
    pub section: Option<String>,
    pub name: Option<String>,
    /// Every entry rather than only the active one
    pub all: bool,
}

/// Run the httpd command
pub fn run_httpd(files: &[PathBuf], lookup: &HttpdLookup, settings: &HttpdSettings) -> Result<()> {
    let docs = files
        .iter()
        .map(|file| -> Result<HttpdConf> {
            let context = read_context(&NormalizedPath::new(file))?;
            Ok(HttpdConf::parse_with(&context, settings))
        })
        .collect::<Result<Vec<_>>>()?;
    let all = HttpdConfAll::with_settings(&docs, settings);
    tracing::debug!(files = docs.len(), directive = %lookup.directive, "Combined httpd configuration");

    let directive = lookup.directive.as_str();
    match &lookup.section {
        Some(kind) => {
            let query = SectionQuery::new(kind.as_str(), lookup.name.as_deref().unwrap_or(""));
            if lookup.all {
                print_json(&all.get_section_setting_list(directive, &query))
            } else {
                print_json(&all.get_section_active_setting(directive, &query))
            }
        }
        None if lookup.all => print_json(all.get_setting_list(directive)),
        None => print_json(&all.get_active_setting(directive)),
    }
}
