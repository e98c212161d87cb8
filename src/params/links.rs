//! Outgoing navigation links

use super::namespace::ParameterNamespace;
use crate::history::TokenHistory;
use crate::tracker::ContinuationPageTracker;
use serde::Serialize;
use url::form_urlencoded;

/// Links a pager can offer for the page being viewed
///
/// A link is `None` when that direction is not navigable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationLinks {
    /// Back to page 1 (needs no token)
    pub first: Option<String>,
    /// One page back, via the recorded token
    pub previous: Option<String>,
    /// One page forward, via the source's next token
    pub next: Option<String>,
}

/// Builds pager URLs under a parameter namespace
///
/// Every link carries the page number, page size, and (when present) the
/// token and serialized history. Preserved parameters are emitted first,
/// in their original order.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base_url: String,
    namespace: ParameterNamespace,
    page_size: u32,
    preserved: Vec<(String, String)>,
    history_json: Option<String>,
}

impl LinkBuilder {
    /// Create a link builder
    pub fn new(base_url: impl Into<String>, namespace: ParameterNamespace, page_size: u32) -> Self {
        Self {
            base_url: base_url.into(),
            namespace,
            page_size,
            preserved: Vec::new(),
            history_json: None,
        }
    }

    /// Keep unrelated query parameters on every link
    ///
    /// Pairs whose keys belong to this pager are dropped.
    #[must_use]
    pub fn with_preserved(mut self, pairs: &[(String, String)]) -> Self {
        self.preserved = pairs
            .iter()
            .filter(|(key, _)| !self.namespace.owns(key))
            .cloned()
            .collect();
        self
    }

    /// Carry the token history on every link
    #[must_use]
    pub fn with_history(mut self, history: &TokenHistory) -> Self {
        self.history_json = Some(history.to_json());
        self
    }

    /// URL for `page`, fetched with `token`
    pub fn link(&self, page: u32, token: Option<&str>) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.preserved {
            query.append_pair(key, value);
        }
        query.append_pair(&self.namespace.current_page(), &page.max(1).to_string());
        query.append_pair(&self.namespace.page_size(), &self.page_size.to_string());
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            query.append_pair(&self.namespace.page_token(), token);
        }
        if let Some(json) = &self.history_json {
            query.append_pair(&self.namespace.token_history(), json);
        }

        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!("{}{separator}{}", self.base_url, query.finish())
    }

    /// URL for the first page
    pub fn first(&self) -> String {
        self.link(1, None)
    }

    /// First/previous/next links for the tracker's current state
    pub fn navigation(&self, tracker: &ContinuationPageTracker) -> NavigationLinks {
        let state = tracker.state();
        let page = state.current_page();

        NavigationLinks {
            first: (page > 1).then(|| self.first()),
            previous: tracker
                .previous_token(page)
                .map(|token| self.link(page - 1, Some(token))),
            next: page
                .checked_add(1)
                .filter(|_| tracker.can_go_forward())
                .map(|next| self.link(next, state.next_token())),
        }
    }
}
