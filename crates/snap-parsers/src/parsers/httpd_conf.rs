//! Apache httpd configuration parser
//!
//! Turns one configuration file into a [`Section`] tree:
//!
//! ```text
//! DocumentRoot "/var/www/html"        -> directive at top level
//! <IfModule prefork.c>                -> nested section (IfModule, prefork.c)
//!     MaxClients 256                  -> directive inside it
//! </IfModule>
//! ```
//!
//! Besides the full tree, the parser keeps the content before and after the
//! first top-level fragment inclusion (`IncludeOptional conf.d/*.conf` by
//! default) as two separate trees. The combiner uses them to place the
//! fragments between the two halves of the main file.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use snap_context::Context;

use crate::section::{ParsedEntry, Section, SectionKey};
use crate::settings::HttpdSettings;

/// `<Kind args...>` section opening tag
static SECTION_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<([^\s>/][^\s>]*)\s*([^>]*?)\s*>").unwrap());

/// One parsed httpd configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HttpdConf {
    file_name: Option<String>,
    file_path: Option<String>,
    data: Section,
    head: Section,
    tail: Section,
}

/// Which half of the file top-level content currently goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Half {
    Head,
    Tail,
}

struct Builder<'a> {
    context: &'a Context,
    data: Section,
    head: Section,
    tail: Section,
    half: Half,
    open: Vec<(SectionKey, Section)>,
}

impl<'a> Builder<'a> {
    fn new(context: &'a Context) -> Self {
        Self {
            context,
            data: Section::new(),
            head: Section::new(),
            tail: Section::new(),
            half: Half::Head,
            open: Vec::new(),
        }
    }

    fn top_half(&mut self) -> &mut Section {
        match self.half {
            Half::Head => &mut self.head,
            Half::Tail => &mut self.tail,
        }
    }

    fn open_section(&mut self, key: SectionKey) {
        self.open.push((key, Section::new()));
    }

    fn close_section(&mut self) {
        let Some((key, body)) = self.open.pop() else {
            tracing::debug!(
                file = ?self.context.file_path(),
                "Ignoring close tag without an open section"
            );
            return;
        };
        match self.open.last_mut() {
            Some((_, parent)) => parent.attach_section(key, body),
            None => {
                self.top_half().attach_section(key.clone(), body.clone());
                self.data.attach_section(key, body);
            }
        }
    }

    fn add_directive(&mut self, directive: &str, value: &str, line: &str) {
        let (section, section_name) = match self.open.last() {
            Some((key, _)) => (Some(key.kind.clone()), Some(key.name.clone())),
            None => (None, None),
        };
        let entry = ParsedEntry {
            value: value.to_string(),
            line: line.to_string(),
            section,
            section_name,
            file_name: self.context.file_name().map(str::to_string),
            file_path: self.context.file_path().map(str::to_string),
        };
        match self.open.last_mut() {
            Some((_, body)) => body.push_entry(directive, entry),
            None => {
                self.top_half().push_entry(directive, entry.clone());
                self.data.push_entry(directive, entry);
            }
        }
    }

    fn finish(mut self) -> (Section, Section, Section) {
        while !self.open.is_empty() {
            self.close_section();
        }
        (self.data, self.head, self.tail)
    }
}

impl HttpdConf {
    /// Parse with the default main-file conventions.
    pub fn parse(context: &Context) -> Self {
        Self::parse_with(context, &HttpdSettings::default())
    }

    /// Parse one configuration file.
    ///
    /// Comments and blank lines are skipped, backslash continuations are
    /// joined, and lines that are neither a section tag nor a
    /// `Directive value` pair are dropped.
    pub fn parse_with(context: &Context, settings: &HttpdSettings) -> Self {
        let mut builder = Builder::new(context);

        for line in active_lines(context.content()) {
            if line.starts_with("</") {
                builder.close_section();
                continue;
            }

            if line.starts_with('<') {
                match SECTION_OPEN.captures(&line) {
                    Some(caps) => {
                        let kind = caps.get(1).map_or("", |m| m.as_str());
                        let name = caps.get(2).map_or("", |m| m.as_str());
                        builder.open_section(SectionKey::new(kind, name));
                    }
                    None => tracing::debug!(%line, "Dropping malformed section tag"),
                }
                continue;
            }

            let Some((directive, rest)) = line.split_once(char::is_whitespace) else {
                tracing::debug!(%line, "Dropping directive without a value");
                continue;
            };
            let value = rest.trim().trim_matches(|c: char| c == '"' || c == '\'');

            builder.add_directive(directive, value, &line);

            if builder.open.is_empty()
                && builder.half == Half::Head
                && settings.is_split_point(directive, value)
            {
                builder.half = Half::Tail;
            }
        }

        let (data, head, tail) = builder.finish();
        Self {
            file_name: context.file_name().map(str::to_string),
            file_path: context.file_path().map(str::to_string),
            data,
            head,
            tail,
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref()
    }

    /// The whole file as one tree.
    pub fn data(&self) -> &Section {
        &self.data
    }

    /// Content up to and including the fragment inclusion directive.
    pub fn head(&self) -> &Section {
        &self.head
    }

    /// Content after the fragment inclusion directive.
    pub fn tail(&self) -> &Section {
        &self.tail
    }

    /// Top-level entries for `directive`.
    pub fn get(&self, directive: &str) -> Option<&[ParsedEntry]> {
        self.data.directive(directive)
    }

    pub fn contains(&self, directive: &str) -> bool {
        self.data.contains_directive(directive)
    }
}

/// Non-comment, non-blank lines with continuations joined.
fn active_lines(content: &[String]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending = String::new();

    for raw in content {
        let line = raw.trim();
        if pending.is_empty() && (line.is_empty() || line.starts_with('#')) {
            continue;
        }
        if let Some(continued) = line.strip_suffix('\\') {
            pending.push_str(continued.trim_end());
            pending.push(' ');
            continue;
        }
        pending.push_str(line);
        let joined = pending.trim().to_string();
        pending.clear();
        if !joined.is_empty() {
            lines.push(joined);
        }
    }

    let leftover = pending.trim();
    if !leftover.is_empty() {
        lines.push(leftover.to_string());
    }
    lines
}
