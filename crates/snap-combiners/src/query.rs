//! Section lookups over a merged tree

use serde::Serialize;
use snap_parsers::{ParsedEntry, Section, SectionKey};

/// Which nested sections a lookup targets.
///
/// `kind` must match exactly; `name` only has to occur somewhere in the
/// section name, so `("IfModule", "prefork")` finds `<IfModule prefork.c>`.
/// An empty name matches every section of that kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionQuery {
    pub kind: String,
    pub name: String,
}

impl SectionQuery {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Build a query from loosely shaped arguments.
    ///
    /// `[kind]` and `[kind, name]` are accepted; anything else gives `None`.
    pub fn from_parts<S: AsRef<str>>(parts: &[S]) -> Option<Self> {
        match parts {
            [kind] => Some(Self::new(kind.as_ref(), "")),
            [kind, name] => Some(Self::new(kind.as_ref(), name.as_ref())),
            _ => None,
        }
    }

    pub fn matches(&self, key: &SectionKey) -> bool {
        key.kind == self.kind && key.name.contains(self.name.as_str())
    }
}

impl From<&str> for SectionQuery {
    fn from(kind: &str) -> Self {
        Self::new(kind, "")
    }
}

impl From<(&str, &str)> for SectionQuery {
    fn from((kind, name): (&str, &str)) -> Self {
        Self::new(kind, name)
    }
}

/// Entries of a directive found directly inside one matching section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionMatch<'a> {
    pub key: &'a SectionKey,
    pub entries: &'a [ParsedEntry],
}

impl<'a> SectionMatch<'a> {
    /// The entry in effect within this section.
    pub fn active(&self) -> Option<&'a ParsedEntry> {
        self.entries.last()
    }
}

/// Collect `directive` from every section matching `query`.
///
/// A matching section is not searched any deeper; sections that do not
/// match are. Sections without the directive, or with an empty entry list,
/// contribute nothing.
pub fn find_in_sections<'a>(
    root: &'a Section,
    directive: &str,
    query: &SectionQuery,
) -> Vec<SectionMatch<'a>> {
    let mut found = Vec::new();
    walk(root, directive, query, &mut found);
    found
}

fn walk<'a>(
    section: &'a Section,
    directive: &str,
    query: &SectionQuery,
    found: &mut Vec<SectionMatch<'a>>,
) {
    for (key, nested) in section.sections() {
        if query.matches(key) {
            if let Some(entries) = nested.directive(directive).filter(|e| !e.is_empty()) {
                found.push(SectionMatch { key, entries });
            }
        } else {
            walk(nested, directive, query, found);
        }
    }
}
