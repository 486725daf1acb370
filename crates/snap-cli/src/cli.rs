//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Snap - Parse captured configuration files and command output
#[derive(Parser, Debug)]
#[command(name = "snap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (toml, json or yaml)
    #[arg(short, long, global = true, env = "SNAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the registered command identifiers
    List,

    /// Parse files with the parser registered for a command identifier
    ///
    /// Examples:
    ///   snap parse iptables /etc/sysconfig/iptables
    ///   snap parse docker_container_inspect inspect.json
    Parse {
        /// Command identifier (use 'snap list' to see options)
        spec: String,

        /// Files holding the captured output
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Combine httpd configuration files and look up a directive
    ///
    /// Examples:
    ///   snap httpd httpd.conf conf.d/*.conf -d Listen
    ///   snap httpd conf.d/*.conf -d MaxClients -s IfModule -n prefork
    Httpd {
        /// Configuration files, in any order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Directive to look up
        #[arg(short, long)]
        directive: String,

        /// Only look inside sections of this type
        #[arg(short, long)]
        section: Option<String>,

        /// Substring the section name must contain
        #[arg(short, long, requires = "section")]
        name: Option<String>,

        /// Print every entry instead of only the active one
        #[arg(long)]
        all: bool,
    },
}
