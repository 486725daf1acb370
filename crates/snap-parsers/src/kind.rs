//! Parser kinds and dispatch

use serde::{Deserialize, Serialize};
use snap_context::Context;

use crate::parsers::{DockerInspect, HttpdConf, InspectKind, IpTables};
use crate::registry::Parsed;
use crate::settings::HttpdSettings;

/// The parsers this crate provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParserKind {
    HttpdConf,
    DockerInspect(InspectKind),
    IpTables,
}

impl ParserKind {
    /// Human-readable parser name
    pub fn name(&self) -> &'static str {
        match self {
            Self::HttpdConf => "HttpdConf",
            Self::DockerInspect(InspectKind::Image) => "DockerInspectImage",
            Self::DockerInspect(InspectKind::Container) => "DockerInspectContainer",
            Self::IpTables => "IpTables",
        }
    }

    /// Run the parser of this kind over one captured input.
    pub fn parse(&self, context: &Context, settings: &HttpdSettings) -> Parsed {
        match self {
            Self::HttpdConf => Parsed::HttpdConf(HttpdConf::parse_with(context, settings)),
            Self::DockerInspect(kind) => {
                Parsed::DockerInspect(DockerInspect::parse_as(context, *kind))
            }
            Self::IpTables => Parsed::IpTables(IpTables::parse(context)),
        }
    }
}

impl std::fmt::Display for ParserKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
