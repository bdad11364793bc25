//! CLI module
//!
//! Command-line interface for running the connector by hand.
//!
//! # Commands
//!
//! - `fetch` - Fetch every page behind a query and print the records
//! - `resolve` - Print the URL a query resolves to, without any I/O

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
