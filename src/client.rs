//! Main client for the Librato API

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::metrics::MetricsService;
use crate::types::StringMap;
use std::time::Duration;

/// Main client for interacting with the Librato API
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
}

impl Client {
    /// Create a client for the default endpoint with the given credentials
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self::from_config(&ClientConfig::new(email, token))
    }

    /// Create a new client builder
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client from a validated configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_auth(config.http_config(), config.auth_config())?;
        Ok(Self { http })
    }

    /// Get the metrics API
    pub fn metrics(&self) -> MetricsService<'_> {
        MetricsService::new(&self.http)
    }

    /// Underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}

/// Builder for creating a [`Client`]
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Set the API base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the account email and API token
    pub fn credentials(mut self, email: impl Into<String>, token: impl Into<String>) -> Self {
        self.config.email = Some(email.into());
        self.config.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_secs = timeout.as_secs().max(1);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(agent.into());
        self
    }

    /// Add a header sent with every request
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.headers.insert(key.into(), value.into());
        self
    }

    /// Replace all extra headers
    pub fn headers(mut self, headers: StringMap) -> Self {
        self.config.headers = headers;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<Client> {
        Client::from_config(&self.config)
    }
}
