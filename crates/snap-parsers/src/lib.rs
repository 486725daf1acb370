//! Parsers for captured configuration files and diagnostic command output
//!
//! Every parser turns one [`snap_context::Context`] into a typed structure
//! and never fails: malformed input degrades to an empty or partial result.
//!
//! - [`HttpdConf`] - Apache httpd configuration files, as a [`Section`] tree
//! - [`DockerInspect`] - `docker inspect` JSON output
//! - [`IpTables`] - `iptables-save` style firewall dumps
//!
//! The [`Registry`] maps logical command identifiers (`httpd_conf`,
//! `iptables`, ...) to the parser that understands them.

pub mod error;
pub mod kind;
pub mod parsers;
pub mod registry;
pub mod section;
pub mod settings;

pub use error::{Error, Result};
pub use kind::ParserKind;
pub use parsers::{
    Chain, DockerInspect, HttpdConf, InspectKind, IpTables, Rule, TargetAction, unmarshal,
};
pub use registry::{Parsed, Registry, builtins};
pub use section::{ParsedEntry, Section, SectionKey};
pub use settings::HttpdSettings;
