//! Input context for snapshot parsers
//!
//! Carries captured command/file text together with the name and path of
//! its origin, and provides the small amount of I/O needed to build that
//! context from files on disk.

pub mod config;
pub mod context;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use context::Context;
pub use error::{Error, Result};
pub use path::NormalizedPath;
