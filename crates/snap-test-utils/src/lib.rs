//! Shared test utilities for the snapshot parser workspace.
//!
//! It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`fixtures`] - sample configuration files and command output
//! - [`tree`] - [`SnapshotTree`] builder for inputs that live on disk

pub mod fixtures;
pub mod tree;

pub use tree::SnapshotTree;

use snap_context::Context;

/// Build a [`Context`] the way captured inputs arrive: surrounding blank
/// lines stripped, split into lines, tagged with `path` when given.
pub fn context_wrap(text: &str, path: Option<&str>) -> Context {
    let context = Context::from_text(text.trim());
    match path {
        Some(path) => context.with_path(path),
        None => context,
    }
}
