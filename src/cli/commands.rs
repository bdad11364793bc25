//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// JSON:API connector CLI
#[derive(Parser, Debug)]
#[command(name = "jsonapi-connector")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Connector properties file (YAML mapping)
    #[arg(short, long, global = true)]
    pub properties: Option<PathBuf>,

    /// Base URL relative queries are appended to
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Character encoding applied to every page
    #[arg(long, global = true)]
    pub encoding: Option<String>,

    /// Connect timeout in milliseconds
    #[arg(long, global = true)]
    pub connect_timeout: Option<String>,

    /// Read timeout in milliseconds
    #[arg(long, global = true)]
    pub read_timeout: Option<String>,

    /// Token values for `{{ name }}` substitution (repeatable, name=value)
    #[arg(long = "var", global = true, value_parser = parse_var)]
    pub vars: Vec<(String, String)>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch all pages for a query and print the records
    Fetch {
        /// Absolute URL, or a suffix appended to the base URL
        query: String,

        /// Stop printing after this many records
        #[arg(long)]
        max_records: Option<usize>,
    },

    /// Show the URL a query resolves to
    Resolve {
        /// Absolute URL, or a suffix appended to the base URL
        query: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Human-readable output
    Pretty,
}

fn parse_var(s: &str) -> std::result::Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected name=value, got '{s}'"))
}
