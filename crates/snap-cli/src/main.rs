//! Snap CLI
//!
//! Parses captured configuration files and diagnostic command output.

mod cli;
mod commands;
mod config;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::HttpdLookup;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let settings = config::load_settings(cli.config.as_deref())?;

    match cli.command {
        Some(cmd) => execute_command(cmd, &settings),
        None => {
            println!("{} Snapshot parser CLI", "snap".green().bold());
            println!();
            println!("Run {} for available commands.", "snap --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, settings: &config::SnapSettings) -> Result<()> {
    match cmd {
        Commands::List => commands::run_list(),
        Commands::Parse { spec, files } => commands::run_parse(&spec, &files, &settings.httpd),
        Commands::Httpd {
            files,
            directive,
            section,
            name,
            all,
        } => {
            let lookup = HttpdLookup {
                directive,
                section,
                name,
                all,
            };
            commands::run_httpd(&files, &lookup, &settings.httpd)
        }
    }
}
