//! Command implementations for snap-cli

pub mod httpd;
pub mod list;
pub mod parse;

pub use httpd::{HttpdLookup, run_httpd};
pub use list::run_list;
pub use parse::run_parse;

use serde::Serialize;

use crate::error::Result;

/// Print `value` as pretty JSON on stdout.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
