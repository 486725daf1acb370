//! Command identifier to parser registry
//!
//! Captured inputs are identified by a logical command identifier
//! (`httpd_conf`, `iptables`, ...). The registry maps each identifier to the
//! parser that understands its output. The built-in table is created once,
//! on first use, and never changes afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;
use snap_context::Context;

use crate::kind::ParserKind;
use crate::parsers::{DockerInspect, HttpdConf, InspectKind, IpTables};
use crate::settings::HttpdSettings;

static BUILTINS: LazyLock<Registry> = LazyLock::new(Registry::with_builtins);

/// The process-wide built-in registry.
pub fn builtins() -> &'static Registry {
    &BUILTINS
}

/// Output of whichever parser a command identifier resolved to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "parser", content = "data", rename_all = "snake_case")]
pub enum Parsed {
    HttpdConf(HttpdConf),
    DockerInspect(DockerInspect),
    IpTables(IpTables),
}

impl Parsed {
    pub fn kind(&self) -> ParserKind {
        match self {
            Self::HttpdConf(_) => ParserKind::HttpdConf,
            Self::DockerInspect(inspect) => ParserKind::DockerInspect(inspect.kind()),
            Self::IpTables(_) => ParserKind::IpTables,
        }
    }

    pub fn as_httpd_conf(&self) -> Option<&HttpdConf> {
        match self {
            Self::HttpdConf(conf) => Some(conf),
            _ => None,
        }
    }

    pub fn into_httpd_conf(self) -> Option<HttpdConf> {
        match self {
            Self::HttpdConf(conf) => Some(conf),
            _ => None,
        }
    }

    pub fn as_docker_inspect(&self) -> Option<&DockerInspect> {
        match self {
            Self::DockerInspect(inspect) => Some(inspect),
            _ => None,
        }
    }

    pub fn as_iptables(&self) -> Option<&IpTables> {
        match self {
            Self::IpTables(tables) => Some(tables),
            _ => None,
        }
    }
}

/// Registry mapping command identifiers to parser kinds.
///
/// # Example
///
/// ```
/// use snap_parsers::{ParserKind, Registry};
///
/// let registry = Registry::with_builtins();
/// assert_eq!(registry.get_parser("iptables"), Some(ParserKind::IpTables));
/// assert_eq!(registry.get_parser("no_such_command"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    parsers: HashMap<String, ParserKind>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Create a registry with the built-in command identifiers registered.
    ///
    /// - `httpd_conf` -> [`HttpdConf`]
    /// - `docker_image_inspect`, `docker_container_inspect` -> [`DockerInspect`]
    /// - `iptables`, `ip6tables`, `iptables_permanent`, `ip6tables_permanent`
    ///   -> [`IpTables`]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("httpd_conf", ParserKind::HttpdConf);
        registry.register(
            "docker_image_inspect",
            ParserKind::DockerInspect(InspectKind::Image),
        );
        registry.register(
            "docker_container_inspect",
            ParserKind::DockerInspect(InspectKind::Container),
        );
        for spec in [
            "iptables",
            "ip6tables",
            "iptables_permanent",
            "ip6tables_permanent",
        ] {
            registry.register(spec, ParserKind::IpTables);
        }
        registry
    }

    /// Register a parser for a command identifier, replacing any previous one.
    pub fn register(&mut self, spec: impl Into<String>, kind: ParserKind) {
        self.parsers.insert(spec.into(), kind);
    }

    pub fn get_parser(&self, spec: &str) -> Option<ParserKind> {
        self.parsers.get(spec).copied()
    }

    pub fn has_parser(&self, spec: &str) -> bool {
        self.parsers.contains_key(spec)
    }

    /// All registered command identifiers, sorted.
    pub fn list_specs(&self) -> Vec<String> {
        let mut specs: Vec<String> = self.parsers.keys().cloned().collect();
        specs.sort();
        specs
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Parse `context` with the parser registered for `spec`.
    ///
    /// Returns `None` only when `spec` is not registered; the parsers
    /// themselves always produce a (possibly empty) result.
    pub fn parse(&self, spec: &str, context: &Context, settings: &HttpdSettings) -> Option<Parsed> {
        let kind = self.get_parser(spec)?;
        tracing::debug!(spec, parser = %kind, file = ?context.file_path(), "Parsing input");
        Some(kind.parse(context, settings))
    }
}
