//! Page advancing
//!
//! Derives the next page request from the metadata of the current page.

use super::types::{PageRequest, PageResponseMeta};

/// Compute the parameters for the next page, or `None` when exhausted
///
/// The next page starts where this one ended and keeps the same length.
/// The server does not echo sort options back, so `order_by` and `sort`
/// are carried over from `original`; without it the next request has no
/// ordering preference.
///
/// Exhaustion is measured against `found`, not `total`.
pub fn advance(response: &PageResponseMeta, original: Option<&PageRequest>) -> Option<PageRequest> {
    let next_offset = response.offset.saturating_add(response.length);

    if next_offset >= response.found {
        return None;
    }

    Some(PageRequest {
        offset: Some(next_offset),
        length: Some(response.length),
        order_by: original.and_then(|o| o.order_by.clone()),
        sort: original.and_then(|o| o.sort.clone()),
    })
}
