//! Token history types
//!
//! A `TokenHistory` maps page numbers to the token that was used to fetch
//! that page. Page 1 is the origin and never has a token.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Default number of page tokens retained
pub const DEFAULT_MAX_HISTORY_ENTRIES: usize = 20;

/// Lowest page number that can carry a token
pub const FIRST_RECORDABLE_PAGE: u32 = 2;

/// Bounded page number → continuation token store
///
/// Keys are unique page numbers `>= 2`. When the number of entries would
/// exceed `max_entries`, the smallest page numbers are dropped first. A
/// bound of `0` disables eviction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenHistory {
    /// Page number → token used to arrive at that page
    pub(super) entries: BTreeMap<u32, String>,
    /// Maximum retained entries (0 = unbounded)
    pub(super) max_entries: usize,
}

impl Default for TokenHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenHistory {
    /// Create an empty history with the default bound
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_HISTORY_ENTRIES)
    }

    /// Create an empty history with a custom bound (0 = unbounded)
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            max_entries,
        }
    }

    /// Create an empty history without a bound
    pub fn unbounded() -> Self {
        Self::with_max_entries(0)
    }

    /// Maximum retained entries (0 = unbounded)
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Change the bound, evicting immediately if the history is now too large
    pub fn set_max_entries(&mut self, max_entries: usize) {
        self.max_entries = max_entries;
        self.enforce_bound();
    }

    /// Record the token used to arrive at `page`
    ///
    /// Returns `false` without touching the history when `page < 2` or the
    /// token is empty.
    pub fn insert(&mut self, page: u32, token: impl Into<String>) -> bool {
        let token = token.into();
        if page < FIRST_RECORDABLE_PAGE || token.is_empty() {
            return false;
        }
        self.entries.insert(page, token);
        self.enforce_bound();
        true
    }

    /// Token used to arrive at `page`
    pub fn get(&self, page: u32) -> Option<&str> {
        self.entries.get(&page).map(String::as_str)
    }

    /// Check whether a token is stored for `page`
    pub fn contains(&self, page: u32) -> bool {
        self.entries.contains_key(&page)
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the history is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry, keeping the bound
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Stored page numbers in ascending order
    pub fn pages(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }

    /// Iterate `(page, token)` pairs in ascending page order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.entries.iter().map(|(page, token)| (*page, token.as_str()))
    }

    /// Evict the smallest page numbers until the bound holds
    fn enforce_bound(&mut self) {
        if self.max_entries == 0 {
            return;
        }
        while self.entries.len() > self.max_entries {
            if let Some((page, _)) = self.entries.pop_first() {
                tracing::debug!(page, bound = self.max_entries, "Evicted page token");
            }
        }
    }
}

impl Serialize for TokenHistory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}
