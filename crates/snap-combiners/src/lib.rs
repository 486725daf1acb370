//! Combiners that fold several parsed sources into one logical view
//!
//! [`HttpdConfAll`] takes every parsed httpd configuration file of one host,
//! orders them the way httpd loads them, and answers "which value is in
//! effect" questions over the merged tree:
//!
//! ```
//! use snap_combiners::{HttpdConfAll, SectionQuery};
//! use snap_context::Context;
//! use snap_parsers::HttpdConf;
//!
//! let a = HttpdConf::parse(
//!     &Context::from_text("<IfModule prefork.c>\nMaxClients 256\n</IfModule>")
//!         .with_path("/etc/httpd/conf.d/a.conf"),
//! );
//! let b = HttpdConf::parse(
//!     &Context::from_text("<IfModule prefork.c>\nMaxClients 512\n</IfModule>")
//!         .with_path("/etc/httpd/conf.d/b.conf"),
//! );
//!
//! let all = HttpdConfAll::new(&[b, a]);
//! let query = SectionQuery::from(("IfModule", "prefork"));
//! let active = all.get_section_active_setting("MaxClients", &query);
//! assert_eq!(active[0].value, "512");
//! ```

pub mod httpd_conf_all;
pub mod order;
pub mod query;

pub use httpd_conf_all::HttpdConfAll;
pub use order::{ConfigData, priority_order};
pub use query::{SectionMatch, SectionQuery};
