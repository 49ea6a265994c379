//! Librato CLI
//!
//! Command-line interface for the Librato metrics API

use clap::Parser;
use librato::cli::{Cli, Runner};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let runner = Runner::new(cli);

    let result = match runner.load_config() {
        Ok(config) => {
            // Initialize logging
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive(runner.log_level(&config).into()),
                )
                .with_writer(std::io::stderr)
                .init();

            runner.run(&config).await
        }
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
