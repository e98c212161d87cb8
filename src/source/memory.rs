//! In-memory continuation source

use super::types::{ContinuationSource, PageFetch};
use crate::error::{Error, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Serves a fixed list of items, one page per fetch
///
/// Tokens are base64-encoded start offsets, opaque to callers like any
/// real cursor.
#[derive(Debug, Clone)]
pub struct MemorySource<T> {
    items: Vec<T>,
}

impl<T> MemorySource<T> {
    /// Create a source over `items`
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Total number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the source has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Token that starts a fetch at `offset`
    pub fn encode_token(offset: usize) -> String {
        STANDARD.encode(offset.to_string())
    }

    /// Offset carried by `token`
    pub fn decode_token(token: &str) -> Result<usize> {
        let bytes = STANDARD
            .decode(token)
            .map_err(|e| Error::invalid_token(format!("not base64: {e}")))?;
        let text = String::from_utf8(bytes)
            .map_err(|_| Error::invalid_token("offset is not UTF-8"))?;
        text.parse::<usize>()
            .map_err(|_| Error::invalid_token(format!("'{text}' is not an offset")))
    }
}

#[async_trait]
impl<T> ContinuationSource for MemorySource<T>
where
    T: Clone + Send + Sync,
{
    type Item = T;

    async fn fetch(&self, page_size: u32, token: Option<&str>) -> Result<PageFetch<T>> {
        let start = match token {
            Some(token) => Self::decode_token(token)?,
            None => 0,
        };
        if start > self.items.len() {
            return Err(Error::invalid_token(format!(
                "offset {start} is past the end ({} items)",
                self.items.len()
            )));
        }

        let end = start
            .saturating_add(page_size.max(1) as usize)
            .min(self.items.len());
        let has_more = end < self.items.len();
        let next_token = has_more.then(|| Self::encode_token(end));

        tracing::debug!(start, end, has_more, "Served page from memory");
        Ok(PageFetch::new(
            self.items[start..end].to_vec(),
            next_token,
            has_more,
        ))
    }
}
