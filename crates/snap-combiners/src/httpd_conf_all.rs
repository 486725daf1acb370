//! Merged view over all httpd configuration files of one host

use serde::Serialize;
use snap_parsers::{HttpdConf, HttpdSettings, ParsedEntry, Section};

use crate::order::{ConfigData, priority_order};
use crate::query::{SectionMatch, SectionQuery, find_in_sections};

/// Every httpd configuration file folded into one tree.
///
/// Nothing is overridden during the merge: each directive keeps all of its
/// entries, in load order, and the last one is the value httpd applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HttpdConfAll {
    data: Section,
    config_data: Vec<ConfigData>,
}

impl HttpdConfAll {
    /// Combine `docs` using the default main file conventions.
    pub fn new(docs: &[HttpdConf]) -> Self {
        Self::with_settings(docs, &HttpdSettings::default())
    }

    pub fn with_settings(docs: &[HttpdConf], settings: &HttpdSettings) -> Self {
        let config_data = priority_order(docs, settings);
        let mut data = Section::new();
        for slot in &config_data {
            tracing::debug!(file_path = ?slot.file_path, "Merging httpd configuration");
            data.merge_from(&slot.data);
        }
        Self { data, config_data }
    }

    /// The merged tree.
    pub fn data(&self) -> &Section {
        &self.data
    }

    /// What each file contributed, in merge order.
    pub fn config_data(&self) -> &[ConfigData] {
        &self.config_data
    }

    /// All top-level entries for `directive` in load order, empty when the
    /// directive is never set outside a section.
    pub fn get_setting_list(&self, directive: &str) -> &[ParsedEntry] {
        self.data.directive(directive).unwrap_or_default()
    }

    /// Entries for `directive` inside every section matching `query`.
    pub fn get_section_setting_list(
        &self,
        directive: &str,
        query: &SectionQuery,
    ) -> Vec<SectionMatch<'_>> {
        find_in_sections(&self.data, directive, query)
    }

    /// Like [`get_section_setting_list`](Self::get_section_setting_list) with
    /// the section given as `[kind]` or `[kind, name]`.
    ///
    /// Any other shape yields an empty result.
    pub fn get_section_setting_list_parts<S: AsRef<str>>(
        &self,
        directive: &str,
        parts: &[S],
    ) -> Vec<SectionMatch<'_>> {
        match SectionQuery::from_parts(parts) {
            Some(query) => self.get_section_setting_list(directive, &query),
            None => {
                tracing::debug!(parts = parts.len(), "Ignoring malformed section query");
                Vec::new()
            }
        }
    }

    /// The top-level entry in effect for `directive`.
    ///
    /// Returns `None` when the directive is not set, whereas
    /// [`get_section_active_setting`](Self::get_section_active_setting)
    /// returns an empty vector. Callers depend on both shapes.
    pub fn get_active_setting(&self, directive: &str) -> Option<&ParsedEntry> {
        self.get_setting_list(directive).last()
    }

    /// The entry in effect for `directive` in each section matching
    /// `query`, in traversal order.
    ///
    /// Never `None`: no match gives an empty vector. See
    /// [`get_active_setting`](Self::get_active_setting) for the top-level
    /// counterpart, which signals absence differently.
    pub fn get_section_active_setting(
        &self,
        directive: &str,
        query: &SectionQuery,
    ) -> Vec<&ParsedEntry> {
        self.get_section_setting_list(directive, query)
            .into_iter()
            .filter_map(|found| found.active())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snap_context::Context;

    fn doc(text: &str, path: &str) -> HttpdConf {
        HttpdConf::parse(&Context::from_text(text).with_path(path))
    }

    #[test]
    fn test_empty_input() {
        let all = HttpdConfAll::new(&[]);
        assert!(all.data().is_empty());
        assert!(all.config_data().is_empty());
        assert!(all.get_setting_list("Listen").is_empty());
        assert!(all.get_active_setting("Listen").is_none());
        assert!(
            all.get_section_active_setting("Listen", &SectionQuery::from("VirtualHost"))
                .is_empty()
        );
    }

    #[test]
    fn test_top_level_last_wins() {
        let all = HttpdConfAll::new(&[
            doc("Listen 80", "/etc/httpd/conf.d/a.conf"),
            doc("Listen 8080", "/etc/httpd/conf.d/b.conf"),
        ]);
        assert_eq!(all.get_setting_list("Listen").len(), 2);
        assert_eq!(all.get_active_setting("Listen").unwrap().value, "8080");
    }

    #[test]
    fn test_malformed_parts_give_empty_result() {
        let all = HttpdConfAll::new(&[doc(
            "<IfModule prefork.c>\nMaxClients 256\n</IfModule>",
            "/etc/httpd/conf.d/a.conf",
        )]);
        let empty: [&str; 0] = [];
        assert!(all.get_section_setting_list_parts("MaxClients", &empty).is_empty());
        assert!(
            all.get_section_setting_list_parts("MaxClients", &["IfModule", "prefork", "x"])
                .is_empty()
        );
        assert_eq!(
            all.get_section_setting_list_parts("MaxClients", &["IfModule"]).len(),
            1
        );
    }
}
