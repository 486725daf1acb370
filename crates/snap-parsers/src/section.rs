//! Typed section tree shared by the httpd parser and combiner
//!
//! A [`Section`] holds the directives that appear directly inside it and the
//! sections nested inside it. Both maps keep first-insertion order, so
//! iterating a tree visits things in the order the configuration declared
//! them.

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// One occurrence of a directive in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedEntry {
    /// The value with surrounding quotes removed
    pub value: String,
    /// The complete line as found in the file
    pub line: String,
    /// Type of the enclosing section, `None` at top level
    pub section: Option<String>,
    /// Name of the enclosing section, `None` at top level
    pub section_name: Option<String>,
    pub file_name: Option<String>,
    pub file_path: Option<String>,
}

/// Identity of a nested section: its type and its name.
///
/// `<IfModule prefork.c>` has kind `IfModule` and name `prefork.c`. A
/// section opened without arguments has an empty name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SectionKey {
    pub kind: String,
    pub name: String,
}

impl SectionKey {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "<{}>", self.kind)
        } else {
            write!(f, "<{} {}>", self.kind, self.name)
        }
    }
}

/// A grouping node: directives declared directly inside it plus nested
/// sections keyed by [`SectionKey`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    directives: IndexMap<String, Vec<ParsedEntry>>,
    #[serde(serialize_with = "serialize_sections")]
    sections: IndexMap<SectionKey, Section>,
}

#[derive(Serialize)]
struct NestedSection<'a> {
    section: &'a str,
    name: &'a str,
    body: &'a Section,
}

fn serialize_sections<S: Serializer>(
    sections: &IndexMap<SectionKey, Section>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(sections.iter().map(|(key, body)| NestedSection {
        section: &key.kind,
        name: &key.name,
        body,
    }))
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries for a directive declared directly in this section.
    pub fn directive(&self, name: &str) -> Option<&[ParsedEntry]> {
        self.directives.get(name).map(Vec::as_slice)
    }

    pub fn contains_directive(&self, name: &str) -> bool {
        self.directives.contains_key(name)
    }

    /// Directives declared directly in this section, in declaration order.
    pub fn directives(&self) -> impl Iterator<Item = (&str, &[ParsedEntry])> + '_ {
        self.directives
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    pub fn section(&self, key: &SectionKey) -> Option<&Section> {
        self.sections.get(key)
    }

    /// Sections nested directly in this one, in declaration order.
    pub fn sections(&self) -> impl Iterator<Item = (&SectionKey, &Section)> + '_ {
        self.sections.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty() && self.sections.is_empty()
    }

    /// Append one occurrence of a directive.
    pub fn push_entry(&mut self, directive: impl Into<String>, entry: ParsedEntry) {
        self.directives
            .entry(directive.into())
            .or_default()
            .push(entry);
    }

    /// Fold `body` into the nested section at `key`, creating it if needed.
    ///
    /// A section that appears twice at the same level ends up as one node
    /// whose entry lists hold both occurrences in order.
    pub fn attach_section(&mut self, key: SectionKey, body: Section) {
        match self.sections.get_mut(&key) {
            Some(existing) => existing.absorb(body),
            None => {
                self.sections.insert(key, body);
            }
        }
    }

    /// Deep-merge `other` into this section.
    ///
    /// Entry lists are concatenated (this section's entries first) and
    /// nested sections are merged recursively. Nothing is ever dropped.
    pub fn merge_from(&mut self, other: &Section) {
        for (directive, entries) in &other.directives {
            self.directives
                .entry(directive.clone())
                .or_default()
                .extend(entries.iter().cloned());
        }
        for (key, nested) in &other.sections {
            self.sections
                .entry(key.clone())
                .or_default()
                .merge_from(nested);
        }
    }

    fn absorb(&mut self, other: Section) {
        for (directive, entries) in other.directives {
            self.directives.entry(directive).or_default().extend(entries);
        }
        for (key, nested) in other.sections {
            self.attach_section(key, nested);
        }
    }

    /// Number of entries for `directive` anywhere in this tree.
    pub fn count_entries(&self, directive: &str) -> usize {
        let own = self.directives.get(directive).map_or(0, Vec::len);
        own + self
            .sections
            .values()
            .map(|nested| nested.count_entries(directive))
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(value: &str) -> ParsedEntry {
        ParsedEntry {
            value: value.to_string(),
            line: format!("Listen {value}"),
            section: None,
            section_name: None,
            file_name: None,
            file_path: None,
        }
    }

    #[test]
    fn test_push_entry_preserves_order() {
        let mut section = Section::new();
        section.push_entry("Listen", entry("80"));
        section.push_entry("Listen", entry("443"));

        let values: Vec<_> = section
            .directive("Listen")
            .unwrap()
            .iter()
            .map(|e| e.value.as_str())
            .collect();
        assert_eq!(values, ["80", "443"]);
    }

    #[test]
    fn test_attach_same_key_folds_entries() {
        let key = SectionKey::new("IfModule", "mod_rewrite.c");
        let mut first = Section::new();
        first.push_entry("RewriteEngine", entry("On"));
        let mut second = Section::new();
        second.push_entry("RewriteEngine", entry("Off"));

        let mut root = Section::new();
        root.attach_section(key.clone(), first);
        root.attach_section(key.clone(), second);

        assert_eq!(root.sections().count(), 1);
        let merged = root.section(&key).unwrap().directive("RewriteEngine").unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1].value, "Off");
    }

    #[test]
    fn test_merge_from_concatenates_nested() {
        let key = SectionKey::new("VirtualHost", "*:80");
        let mut a = Section::new();
        let mut a_vhost = Section::new();
        a_vhost.push_entry("ServerName", entry("a.example.com"));
        a.attach_section(key.clone(), a_vhost);

        let mut b = Section::new();
        let mut b_vhost = Section::new();
        b_vhost.push_entry("ServerName", entry("b.example.com"));
        b_vhost.push_entry("ServerAlias", entry("www.example.com"));
        b.attach_section(key.clone(), b_vhost);

        a.merge_from(&b);

        let vhost = a.section(&key).unwrap();
        assert_eq!(vhost.directive("ServerName").unwrap().len(), 2);
        assert!(vhost.contains_directive("ServerAlias"));
        assert_eq!(a.count_entries("ServerName"), 2);
    }

    #[test]
    fn test_section_key_display() {
        assert_eq!(
            SectionKey::new("IfModule", "prefork.c").to_string(),
            "<IfModule prefork.c>"
        );
        assert_eq!(SectionKey::new("Directory", "").to_string(), "<Directory>");
    }

    #[test]
    fn test_serialize_nested_sections_as_list() {
        let mut root = Section::new();
        let mut nested = Section::new();
        nested.push_entry("MaxClients", entry("256"));
        root.attach_section(SectionKey::new("IfModule", "prefork.c"), nested);

        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(json["sections"][0]["section"], "IfModule");
        assert_eq!(json["sections"][0]["name"], "prefork.c");
        assert_eq!(
            json["sections"][0]["body"]["directives"]["MaxClients"][0]["value"],
            "256"
        );
    }
}
