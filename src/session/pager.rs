//! Request-scoped pager session

use super::types::PageView;
use crate::error::Result;
use crate::params::{LinkBuilder, PagerQuery};
use crate::settings::PagerSettings;
use crate::source::ContinuationSource;
use crate::tracker::ContinuationPageTracker;

/// Serves continuation-paged requests against one source
///
/// Holds no per-request state; every call to [`PagerSession::handle`]
/// builds its own tracker from the incoming query.
#[derive(Debug)]
pub struct PagerSession<'a, S> {
    source: &'a S,
    settings: PagerSettings,
    base_url: String,
}

impl<'a, S: ContinuationSource> PagerSession<'a, S> {
    /// Create a session; links point at `settings.link_url` or `/`
    pub fn new(source: &'a S, settings: PagerSettings) -> Self {
        let base_url = settings.link_url.clone().unwrap_or_else(|| "/".to_string());
        Self {
            source,
            settings,
            base_url,
        }
    }

    /// Point generated links at `base_url` (typically the request path)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Active settings
    pub fn settings(&self) -> &PagerSettings {
        &self.settings
    }

    /// Parse a raw query string under this session's namespace
    pub fn parse_query(&self, raw: &str) -> PagerQuery {
        PagerQuery::from_query_str(
            raw,
            &self.settings.parameter_prefix,
            self.settings.max_history_entries,
        )
    }

    /// Serve a raw query string
    pub async fn handle_query_str(&self, raw: &str) -> Result<PageView<S::Item>> {
        self.handle(self.parse_query(raw)).await
    }

    /// Serve one request
    ///
    /// Fetch failures propagate unchanged. A page past the origin requested
    /// without a token is served as page 1.
    pub async fn handle(&self, query: PagerQuery) -> Result<PageView<S::Item>> {
        let page_size = self.settings.clamp_page_size(query.page_size);

        let mut current_page = query.current_page;
        if query.is_tokenless_deep_link() {
            tracing::debug!(
                page = current_page,
                "No token for requested page, serving the first page"
            );
            current_page = 1;
        }
        let token = if current_page > 1 {
            query.page_token.as_deref()
        } else {
            None
        };

        let fetch = match self.source.fetch(page_size, token).await {
            Ok(fetch) => fetch,
            Err(e) => {
                tracing::warn!(page = current_page, error = %e, "Continuation fetch failed");
                return Err(e);
            }
        };

        let mut history = query.token_history;
        history.set_max_entries(self.settings.max_history_entries);
        let mut tracker = ContinuationPageTracker::with_history(history);
        let navigation = tracker.record_arrival(current_page, token, fetch.next_token, fetch.has_more);

        tracing::debug!(
            page = current_page,
            items = fetch.items.len(),
            ?navigation,
            history = tracker.history().len(),
            "Served continuation page"
        );

        let mut links = LinkBuilder::new(
            self.base_url.as_str(),
            self.settings.parameter_prefix.clone(),
            page_size,
        );
        if self.settings.preserve_query_parameters {
            links = links.with_preserved(&query.preserved);
        }
        let token_history = if self.settings.token_accumulation {
            links = links.with_history(tracker.history());
            Some(tracker.history().to_json())
        } else {
            None
        };

        let state = tracker.state().clone();
        Ok(PageView {
            items: fetch.items,
            page_size,
            navigation,
            can_go_back: tracker.can_go_back(state.current_page()),
            can_go_forward: tracker.can_go_forward(),
            previous_token: tracker
                .previous_token(state.current_page())
                .map(str::to_string),
            token_history,
            links: links.navigation(&tracker),
            state,
        })
    }
}
