//! Parser implementations

mod docker_inspect;
mod httpd_conf;
mod iptables;

pub use self::docker_inspect::{DockerInspect, InspectKind, unmarshal};
pub use self::httpd_conf::HttpdConf;
pub use self::iptables::{Chain, IpTables, Rule, TargetAction};
