//! Metrics module
//!
//! Typed access to the Librato `/metrics` endpoints: paginated listing and
//! updating a single metric by name.

mod service;
mod types;

pub use service::MetricsService;
pub use types::{DisplayBound, ListMetricsOptions, ListMetricsResponse, Metric, MetricAttributes};
