//! Tunables for httpd configuration handling

use serde::{Deserialize, Serialize};

fn default_main_file_name() -> String {
    "httpd.conf".to_string()
}

fn default_split_directive() -> String {
    "IncludeOptional".to_string()
}

fn default_split_value() -> String {
    "conf.d/*.conf".to_string()
}

/// Conventions used to recognize the main httpd configuration file and the
/// point inside it where auxiliary fragments get loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpdSettings {
    /// File name of the main configuration file
    #[serde(default = "default_main_file_name")]
    pub main_file_name: String,

    /// Directive that pulls in the fragments (matched case-insensitively)
    #[serde(default = "default_split_directive")]
    pub split_directive: String,

    /// Value of the split directive (matched exactly, quotes stripped)
    #[serde(default = "default_split_value")]
    pub split_value: String,
}

impl Default for HttpdSettings {
    fn default() -> Self {
        Self {
            main_file_name: default_main_file_name(),
            split_directive: default_split_directive(),
            split_value: default_split_value(),
        }
    }
}

impl HttpdSettings {
    /// Whether a top-level directive marks the head/tail boundary.
    pub fn is_split_point(&self, directive: &str, value: &str) -> bool {
        directive.eq_ignore_ascii_case(&self.split_directive) && value == self.split_value
    }
}
