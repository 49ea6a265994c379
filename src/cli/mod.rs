//! CLI module
//!
//! Command-line interface for the Librato API.
//!
//! # Commands
//!
//! - `metrics list` - List metrics, one page or all pages
//! - `metrics update` - Update a metric by name

mod commands;
mod runner;

pub use commands::{Cli, Commands, MetricsCommand, OutputFormat, UpdateArgs};
pub use runner::Runner;
