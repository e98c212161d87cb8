//! Data source types and traits

use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;

/// One page returned by a data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFetch<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Cursor for the following page
    pub next_token: Option<String>,
    /// Whether the store has rows past this page
    pub has_more: bool,
}

impl<T> PageFetch<T> {
    /// Create a page result
    pub fn new(items: Vec<T>, next_token: Option<String>, has_more: bool) -> Self {
        Self {
            items,
            next_token,
            has_more,
        }
    }

    /// A final page with no continuation
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None, false)
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A forward-only paged store (Cosmos DB, DynamoDB, Azure Table Storage, ...)
///
/// Implementations surface their own failures as [`crate::Error`]; wrapping
/// an `anyhow::Error` is the usual route for driver errors.
#[async_trait]
pub trait ContinuationSource: Send + Sync {
    /// Item type returned per page
    type Item: Send;

    /// Fetch one page starting at `token` (`None` = from the beginning)
    async fn fetch(&self, page_size: u32, token: Option<&str>) -> Result<PageFetch<Self::Item>>;
}
