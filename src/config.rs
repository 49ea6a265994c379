//! Client configuration
//!
//! Settings can come from a YAML or JSON file, from the environment
//! (`LIBRATO_EMAIL`, `LIBRATO_TOKEN`, `LIBRATO_URL`), or be set in code.
//! Environment values override file values.

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::types::{LogLevel, StringMap};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default Librato API endpoint
pub const DEFAULT_BASE_URL: &str = "https://metrics-api.librato.com/v1/";

/// Environment variable holding the account email
pub const ENV_EMAIL: &str = "LIBRATO_EMAIL";

/// Environment variable holding the API token
pub const ENV_TOKEN: &str = "LIBRATO_TOKEN";

/// Environment variable overriding the API base URL
pub const ENV_URL: &str = "LIBRATO_URL";

/// Librato client configuration
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Account email (Basic auth username)
    #[serde(default)]
    pub email: Option<String>,

    /// API token (Basic auth password)
    #[serde(default)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Override the user agent
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: StringMap,

    /// Log level for the CLI
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            email: None,
            token: None,
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            headers: StringMap::new(),
            log_level: None,
        }
    }
}

impl ClientConfig {
    /// Config with credentials and defaults for everything else
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            token: Some(token.into()),
            ..Default::default()
        }
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a file; `.json` files are parsed as JSON, anything else as YAML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `LIBRATO_*` environment variables on top of this config
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    #[must_use]
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(email) = lookup(ENV_EMAIL) {
            self.email = Some(email);
        }
        if let Some(token) = lookup(ENV_TOKEN) {
            self.token = Some(token);
        }
        if let Some(url) = lookup(ENV_URL) {
            self.base_url = url;
        }
        self
    }

    /// Check that the config can be used to build a client
    pub fn validate(&self) -> Result<()> {
        if self.email.as_deref().map_or(true, str::is_empty) {
            return Err(Error::missing_field("email"));
        }
        if self.token.as_deref().map_or(true, str::is_empty) {
            return Err(Error::missing_field("token"));
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_value("base_url", e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(Error::invalid_value(
                "base_url",
                format!("{} cannot be used as a base URL", self.base_url),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be greater than 0"));
        }

        Ok(())
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Credentials as an auth config
    pub fn auth_config(&self) -> AuthConfig {
        match (&self.email, &self.token) {
            (Some(email), Some(token)) => AuthConfig::librato(email.clone(), token.clone()),
            _ => AuthConfig::None,
        }
    }

    /// Transport settings
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(self.base_url.clone())
            .timeout(self.timeout());
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        for (key, value) in &self.headers {
            builder = builder.header(key.clone(), value.clone());
        }
        builder.build()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("headers", &self.headers)
            .field("log_level", &self.log_level)
            .finish()
    }
}
