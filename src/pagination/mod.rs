//! Pagination module
//!
//! # Overview
//!
//! List endpoints return one page at a time along with the server's view of
//! that page (`offset`, `length`, `total`, `found`). [`advance`] turns that
//! view plus the caller's original sort options into the next
//! [`PageRequest`], or `None` once the result set is exhausted.

mod advancer;
mod types;

pub use advancer::advance;
pub use types::{PageRequest, PageResponseMeta};
