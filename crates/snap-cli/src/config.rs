//! Settings file for the CLI

use std::path::Path;

use serde::{Deserialize, Serialize};
use snap_context::{ConfigStore, NormalizedPath};
use snap_parsers::HttpdSettings;

use crate::error::Result;

/// Contents of the settings file; every table is optional.
///
/// ```toml
/// [httpd]
/// main_file_name = "apache2.conf"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapSettings {
    #[serde(default)]
    pub httpd: HttpdSettings,
}

/// Load settings from `path`, or the defaults when no file is given.
pub fn load_settings(path: Option<&Path>) -> Result<SnapSettings> {
    let Some(path) = path else {
        return Ok(SnapSettings::default());
    };
    let path = NormalizedPath::new(path);
    tracing::debug!(%path, "Loading settings");
    Ok(ConfigStore::new().load(&path)?)
}
