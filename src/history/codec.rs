//! JSON round-trip for token history
//!
//! Wire shape: an object keyed by decimal page numbers, e.g.
//! `{"2":"<token-for-page-2>","3":"<token-for-page-3>"}`.

use super::types::TokenHistory;
use crate::error::Result;
use std::collections::BTreeMap;

impl TokenHistory {
    /// Parse a history payload, failing on malformed JSON
    ///
    /// `null` and blank payloads decode to an empty history. Entries that
    /// could never have been recorded (page < 2, null or empty token) are
    /// dropped, and the bound is applied exactly as on insert.
    pub fn from_json(json: &str, max_entries: usize) -> Result<Self> {
        let mut history = Self::with_max_entries(max_entries);
        if json.trim().is_empty() {
            return Ok(history);
        }

        let raw: Option<BTreeMap<u32, Option<String>>> = serde_json::from_str(json)?;
        for (page, token) in raw.into_iter().flatten() {
            if let Some(token) = token {
                history.insert(page, token);
            }
        }
        Ok(history)
    }

    /// Parse a client-supplied history payload, never failing
    ///
    /// Tampered or stale payloads degrade to an empty history, which only
    /// disables backward navigation.
    pub fn from_json_lossy(json: &str, max_entries: usize) -> Self {
        match Self::from_json(json, max_entries) {
            Ok(history) => history,
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring malformed token history");
                Self::with_max_entries(max_entries)
            }
        }
    }

    /// Serialize to the wire shape
    pub fn to_json(&self) -> String {
        // Infallible for u32 keys and string values
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "{}".to_string())
    }
}
