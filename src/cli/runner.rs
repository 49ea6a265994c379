//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, MetricsCommand, OutputFormat, UpdateArgs};
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::metrics::{DisplayBound, ListMetricsOptions, Metric, MetricAttributes};
use crate::pagination::PageRequest;
use futures::TryStreamExt;
use serde_json::{json, Value};
use std::pin::pin;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command against an already loaded configuration
    pub async fn run(&self, config: &ClientConfig) -> Result<()> {
        debug!(?config, "Loaded configuration");
        let client = Client::from_config(config)?;

        match &self.cli.command {
            Commands::Metrics(MetricsCommand::List {
                name,
                offset,
                length,
                order_by,
                sort,
                all,
            }) => {
                let page = PageRequest {
                    offset: *offset,
                    length: *length,
                    order_by: order_by.clone(),
                    sort: sort.clone(),
                };
                let options = ListMetricsOptions {
                    page: (page != PageRequest::default()).then_some(page),
                    name: name.clone(),
                };
                self.list(&client, options, *all).await
            }
            Commands::Metrics(MetricsCommand::Update(args)) => {
                let metric = Self::build_metric(args);
                self.update(&client, &metric).await
            }
        }
    }

    /// Log level requested on the command line or in the config file
    pub fn log_level(&self, config: &ClientConfig) -> tracing::Level {
        if self.cli.verbose {
            return tracing::Level::DEBUG;
        }
        config.log_level.map_or(tracing::Level::INFO, Into::into)
    }

    /// Load configuration: file, then environment, then command-line flags
    pub fn load_config(&self) -> Result<ClientConfig> {
        let config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        Ok(self.apply_flags(config.with_env_overrides()))
    }

    fn apply_flags(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(email) = &self.cli.email {
            config.email = Some(email.clone());
        }
        if let Some(token) = &self.cli.token {
            config.token = Some(token.clone());
        }
        if let Some(url) = &self.cli.url {
            config.base_url = url.clone();
        }
        config
    }

    /// List one page, or every page with `--all`
    async fn list(&self, client: &Client, options: ListMetricsOptions, all: bool) -> Result<()> {
        if all {
            let mut pages = pin!(client.metrics().pages(options));
            let mut count = 0usize;
            while let Some(page) = pages.try_next().await? {
                count += page.metrics.len();
                self.output_message(&json!({
                    "metrics": page.metrics,
                    "query": page.this_page,
                }));
            }
            info!("Listed {count} metrics");
            return Ok(());
        }

        let page = client.metrics().list(&options).await?;
        info!(
            "Listed {} of {} metrics",
            page.metrics.len(),
            page.this_page.found
        );
        self.output_message(&json!({
            "metrics": page.metrics,
            "query": page.this_page,
            "next": page.next_page,
        }));
        Ok(())
    }

    /// Update a single metric
    async fn update(&self, client: &Client, metric: &Metric) -> Result<()> {
        client.metrics().update(metric).await?;
        info!("Updated metric {}", metric.name);
        self.output_message(&json!({"updated": metric}));
        Ok(())
    }

    /// Build the metric body from `metrics update` arguments
    fn build_metric(args: &UpdateArgs) -> Metric {
        let has_attributes = args.color.is_some()
            || args.display_min.is_some()
            || args.display_max.is_some()
            || args.units_short.is_some()
            || args.stacked
            || args.transform.is_some();

        Metric {
            name: args.name.clone(),
            period: args.period,
            display_name: args.display_name.clone(),
            attributes: has_attributes.then(|| MetricAttributes {
                color: args.color.clone(),
                display_min: args.display_min.as_deref().map(DisplayBound::parse),
                display_max: args.display_max.as_deref().map(DisplayBound::parse),
                display_units_short: args.units_short.clone().unwrap_or_default(),
                display_stacked: args.stacked,
                display_transform: args.transform.clone().unwrap_or_default(),
            }),
        }
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}
