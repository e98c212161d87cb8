//! Incoming pager query parameters

use super::namespace::ParameterNamespace;
use crate::history::{TokenHistory, DEFAULT_MAX_HISTORY_ENTRIES};
use crate::types::QueryPairs;

/// Pager state carried by an incoming request's query string
///
/// Parsing never fails: a missing or non-numeric page becomes 1, an empty
/// token becomes `None`, and a malformed history becomes empty. Keys that
/// belong to other pagers or to the host page are kept in `preserved`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerQuery {
    /// 1-based page requested
    pub current_page: u32,
    /// Token to use for this fetch
    pub page_token: Option<String>,
    /// Requested page size, unclamped (`None` if absent or non-numeric)
    pub page_size: Option<u32>,
    /// Round-tripped token history
    pub token_history: TokenHistory,
    /// Query pairs not owned by this pager, in their original order
    pub preserved: QueryPairs,
}

impl Default for PagerQuery {
    fn default() -> Self {
        Self::origin(DEFAULT_MAX_HISTORY_ENTRIES)
    }
}

impl PagerQuery {
    /// Query for the first page with an empty history
    pub fn origin(max_history_entries: usize) -> Self {
        Self {
            current_page: 1,
            page_token: None,
            page_size: None,
            token_history: TokenHistory::with_max_entries(max_history_entries),
            preserved: Vec::new(),
        }
    }

    /// Parse from decoded key/value pairs
    ///
    /// When a key repeats, the last occurrence wins.
    pub fn from_pairs<I, K, V>(
        pairs: I,
        namespace: &ParameterNamespace,
        max_history_entries: usize,
    ) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let page_key = namespace.current_page();
        let token_key = namespace.page_token();
        let size_key = namespace.page_size();
        let history_key = namespace.token_history();

        let mut query = Self::origin(max_history_entries);
        let mut history_json: Option<String> = None;

        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            if key == page_key {
                query.current_page = parse_page(value);
            } else if key == token_key {
                query.page_token = Some(value.to_string()).filter(|t| !t.is_empty());
            } else if key == size_key {
                query.page_size = value.trim().parse().ok();
            } else if key == history_key {
                history_json = Some(value.to_string());
            } else {
                query
                    .preserved
                    .push((key.to_string(), value.to_string()));
            }
        }

        if let Some(json) = history_json {
            query.token_history = TokenHistory::from_json_lossy(&json, max_history_entries);
        }
        query
    }

    /// Parse from a raw query string, with or without the leading `?`
    pub fn from_query_str(
        query: &str,
        namespace: &ParameterNamespace,
        max_history_entries: usize,
    ) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(
            url::form_urlencoded::parse(query.as_bytes()),
            namespace,
            max_history_entries,
        )
    }

    /// Check whether this request is for a page past the origin without a token
    ///
    /// Such a request cannot be served from the cursor API; it happens with
    /// hand-edited or truncated links.
    pub fn is_tokenless_deep_link(&self) -> bool {
        self.current_page > 1 && self.page_token.is_none()
    }
}

fn parse_page(value: &str) -> u32 {
    value.trim().parse::<u32>().map_or(1, |page| page.max(1))
}
