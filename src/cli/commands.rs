//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Librato metrics API command-line client
#[derive(Parser, Debug)]
#[command(name = "librato")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Account email (overrides config and LIBRATO_EMAIL)
    #[arg(long, global = true)]
    pub email: Option<String>,

    /// API token (overrides config and LIBRATO_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// API base URL (overrides config and LIBRATO_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

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
    /// Work with metrics
    #[command(subcommand)]
    Metrics(MetricsCommand),
}

/// `metrics` subcommands
#[derive(Subcommand, Debug)]
pub enum MetricsCommand {
    /// List metrics
    List {
        /// Only metrics matching this name
        #[arg(long)]
        name: Option<String>,

        /// Index of the first metric
        #[arg(long)]
        offset: Option<u64>,

        /// Page size
        #[arg(long)]
        length: Option<u64>,

        /// Field to order by
        #[arg(long = "orderby")]
        order_by: Option<String>,

        /// Sort direction
        #[arg(long)]
        sort: Option<String>,

        /// Follow pagination and print every page
        #[arg(long)]
        all: bool,
    },

    /// Update a metric by name
    Update(UpdateArgs),
}

/// Arguments for `metrics update`
#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Metric name
    pub name: String,

    /// Display name
    #[arg(long)]
    pub display_name: Option<String>,

    /// Reporting period in seconds
    #[arg(long)]
    pub period: Option<u32>,

    /// Chart color
    #[arg(long)]
    pub color: Option<String>,

    /// Y axis lower bound
    #[arg(long)]
    pub display_min: Option<String>,

    /// Y axis upper bound
    #[arg(long)]
    pub display_max: Option<String>,

    /// Short unit label
    #[arg(long)]
    pub units_short: Option<String>,

    /// Stack series by default
    #[arg(long)]
    pub stacked: bool,

    /// Display transform expression
    #[arg(long)]
    pub transform: Option<String>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
