//! Pagination types
//!
//! Librato paginates list endpoints with `offset`/`length` query parameters
//! and reports the slice it actually served in a `query` block.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pagination parameters sent with a list request
///
/// Every field is optional. A `None` field is left out of the query string
/// entirely so the server applies its own default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Index of the first item requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    /// Maximum number of items requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,
    /// Field to sort by
    #[serde(default, rename = "orderby", skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Sort direction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl PageRequest {
    /// Create an empty page request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the offset
    #[must_use]
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the page length
    #[must_use]
    pub fn length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the field to order by
    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some(field.into());
        self
    }

    /// Set the sort direction
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Encode as query parameters (`offset`, `length`, `orderby`, `sort`)
    pub fn query_params(&self) -> HashMap<String, String> {
        let mut params = HashMap::new();
        if let Some(offset) = self.offset {
            params.insert("offset".to_string(), offset.to_string());
        }
        if let Some(length) = self.length {
            params.insert("length".to_string(), length.to_string());
        }
        if let Some(order_by) = self.order_by.as_deref().filter(|s| !s.is_empty()) {
            params.insert("orderby".to_string(), order_by.to_string());
        }
        if let Some(sort) = self.sort.as_deref().filter(|s| !s.is_empty()) {
            params.insert("sort".to_string(), sort.to_string());
        }
        params
    }
}

/// Pagination metadata returned by the server for one page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponseMeta {
    /// First item index actually returned
    #[serde(default)]
    pub offset: u64,
    /// Number of items actually returned
    #[serde(default)]
    pub length: u64,
    /// Items matching the query across all pages
    #[serde(default)]
    pub total: u64,
    /// Items matching the query after filtering
    #[serde(default)]
    pub found: u64,
}

impl PageResponseMeta {
    /// Compute the request for the page after this one
    ///
    /// See [`advance`](super::advance).
    pub fn next_page(&self, original: Option<&PageRequest>) -> Option<PageRequest> {
        super::advance(self, original)
    }

    /// Whether this page is the last one
    pub fn is_last_page(&self) -> bool {
        self.next_page(None).is_none()
    }
}
