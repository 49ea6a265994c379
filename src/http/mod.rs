//! HTTP client module
//!
//! Provides the request/response transport used by the API services.
//! Every call is a single attempt: there is no retry, backoff or
//! client-side rate limiting.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};

#[cfg(test)]
mod tests;
