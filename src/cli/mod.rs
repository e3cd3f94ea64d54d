//! CLI module for saloon-inspect.
//!
//! Commands:
//! - list: report every integration and its artifacts
//! - request: generate a request class

pub mod list;
pub mod make;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::method::Method;

#[derive(Parser, Debug)]
#[command(name = "saloon")]
#[command(about = "Inspect and scaffold Saloon integrations", long_about = None)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long, default_value = ".", global = true)]
    pub root: PathBuf,

    /// Config file (default: <root>/saloon.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all authenticators, connectors, requests, plugins and responses
    List {
        /// Integrations directory (overrides config)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Line width for the text report
        #[arg(short, long)]
        width: Option<usize>,

        /// Disable colors
        #[arg(long)]
        no_color: bool,
    },

    /// Create a new Saloon request class
    Request {
        /// Integration the request belongs to
        integration: String,

        /// Request class name
        name: String,

        /// HTTP method the request sends
        #[arg(short, long, value_enum, default_value_t = Method::Get)]
        method: Method,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_flags() {
        let cli = Cli::parse_from(["saloon", "list", "--format", "json", "--no-color", "-w", "120"]);
        match cli.command {
            Commands::List { format, no_color, width, path } => {
                assert_eq!(format, Format::Json);
                assert!(no_color);
                assert_eq!(width, Some(120));
                assert!(path.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.root, PathBuf::from("."));
    }

    #[test]
    fn test_parse_request_method() {
        let cli = Cli::parse_from(["saloon", "--root", "/app", "request", "Forge", "GetServer", "-m", "PATCH"]);
        match cli.command {
            Commands::Request { integration, name, method, force } => {
                assert_eq!(integration, "Forge");
                assert_eq!(name, "GetServer");
                assert_eq!(method, Method::Patch);
                assert!(!force);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.root, PathBuf::from("/app"));
    }

    #[test]
    fn test_request_method_defaults_to_get() {
        let cli = Cli::parse_from(["saloon", "request", "Forge", "ListServers"]);
        assert!(matches!(cli.command, Commands::Request { method: Method::Get, .. }));
    }
}
