//! List registered command identifiers

use colored::Colorize;
use snap_parsers::builtins;

use crate::error::Result;

/// Run the list command
pub fn run_list() -> Result<()> {
    let registry = builtins();

    println!("{}", "Command Identifiers".bold());
    println!();
    for spec in registry.list_specs() {
        if let Some(kind) = registry.get_parser(&spec) {
            println!("  {:<28} {}", spec.cyan(), kind.name());
        }
    }
    println!();
    println!("{} identifiers registered", registry.len());
    Ok(())
}
