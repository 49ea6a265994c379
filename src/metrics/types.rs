//! Metric types
//!
//! Shapes of the metric objects exchanged with the `/metrics` endpoints.

use crate::pagination::{PageRequest, PageResponseMeta};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// A Librato metric
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Unique metric name
    pub name: String,

    /// Reporting period in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,

    /// Name shown in the UI instead of `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Display attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<MetricAttributes>,
}

impl Metric {
    /// Create a metric with only a name set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the reporting period
    #[must_use]
    pub fn with_period(mut self, seconds: u32) -> Self {
        self.period = Some(seconds);
        self
    }

    /// Set the display name
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Set the display attributes
    #[must_use]
    pub fn with_attributes(mut self, attributes: MetricAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }
}

/// Display attributes of a metric
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricAttributes {
    /// Chart color, e.g. `#3366cc`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Upper bound of the chart's Y axis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_max: Option<DisplayBound>,

    /// Lower bound of the chart's Y axis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_min: Option<DisplayBound>,

    /// Short unit label
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_units_short: String,

    /// Whether series are stacked by default
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_stacked: bool,

    /// Transform expression applied before display
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_transform: String,
}

/// Treats an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Axis bound that the API reports either as a number or as a string
///
/// Both shapes are preserved as received so a value read from the server
/// is written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayBound {
    /// Numeric bound (integer or float)
    Number(serde_json::Number),
    /// String bound, usually a number in text form
    Text(String),
}

impl DisplayBound {
    /// Numeric bound from a float; `None` for NaN or infinity
    pub fn from_f64(value: f64) -> Option<Self> {
        serde_json::Number::from_f64(value).map(Self::Number)
    }

    /// Parse a CLI-style value: numbers become `Number`, anything else `Text`
    pub fn parse(value: &str) -> Self {
        serde_json::from_str::<serde_json::Number>(value.trim())
            .map_or_else(|_| Self::Text(value.to_string()), Self::Number)
    }

    /// Numeric value of the bound, parsing the text form if needed
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<i64> for DisplayBound {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for DisplayBound {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DisplayBound {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Options for listing metrics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMetricsOptions {
    /// Pagination parameters
    pub page: Option<PageRequest>,
    /// Only return metrics whose name matches this filter
    pub name: Option<String>,
}

impl ListMetricsOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pagination parameters
    #[must_use]
    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the name filter
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Options for the given page, keeping the name filter
    #[must_use]
    pub fn advance_page(&self, next: PageRequest) -> Self {
        Self {
            page: Some(next),
            name: self.name.clone(),
        }
    }

    /// Encode as query parameters
    pub fn query_params(&self) -> HashMap<String, String> {
        let mut params = self
            .page
            .as_ref()
            .map(PageRequest::query_params)
            .unwrap_or_default();
        if let Some(name) = self.name.as_deref().filter(|s| !s.is_empty()) {
            params.insert("name".to_string(), name.to_string());
        }
        params
    }
}

/// One page of a metrics listing
#[derive(Debug, Clone, PartialEq)]
pub struct ListMetricsResponse {
    /// Metrics on this page
    pub metrics: Vec<Metric>,
    /// Server-reported pagination metadata for this page
    pub this_page: PageResponseMeta,
    /// Parameters for the following page, `None` when this is the last one
    pub next_page: Option<PageRequest>,
}

impl ListMetricsResponse {
    /// Options that fetch the following page with the same filter
    pub fn next_options(&self, current: &ListMetricsOptions) -> Option<ListMetricsOptions> {
        self.next_page
            .clone()
            .map(|next| current.advance_page(next))
    }
}

/// Raw body of `GET /metrics`
#[derive(Debug, Deserialize)]
pub(crate) struct ListMetricsBody {
    #[serde(default)]
    pub query: PageResponseMeta,
    #[serde(default)]
    pub metrics: Vec<Metric>,
}
