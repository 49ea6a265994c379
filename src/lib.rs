//! # Librato
//!
//! A Rust client for the Librato metrics API.
//!
//! ## Features
//!
//! - **Metric listing**: paginated `GET /metrics` with name filtering and sorting
//! - **Pagination**: next-page computation from the server's `query` block
//! - **Metric updates**: `PUT /metrics/{name}` with typed display attributes
//! - **Configuration**: YAML/JSON files and `LIBRATO_*` environment variables
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use librato::{Client, ListMetricsOptions, PageRequest, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new("ops@example.com", "api-token")?;
//!
//!     let options = ListMetricsOptions::new()
//!         .with_name("cpu")
//!         .with_page(PageRequest::new().length(50).order_by("name"));
//!
//!     let page = client.metrics().list(&options).await?;
//!     for metric in &page.metrics {
//!         println!("{}", metric.name);
//!     }
//!
//!     if let Some(next) = page.next_options(&options) {
//!         let _more = client.metrics().list(&next).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication
pub mod auth;

/// HTTP transport
pub mod http;

/// Pagination parameters and page advancing
pub mod pagination;

/// Metrics API
pub mod metrics;

/// Client configuration
pub mod config;

/// Top-level client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use metrics::{
    DisplayBound, ListMetricsOptions, ListMetricsResponse, Metric, MetricAttributes,
    MetricsService,
};
pub use pagination::{advance, PageRequest, PageResponseMeta};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
