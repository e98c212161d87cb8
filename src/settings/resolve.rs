//! Layered settings resolution

use super::types::{ContinuationModel, PagerOverrides, PagerSettings};
use crate::history::TokenHistory;
use crate::params::{LinkBuilder, NavigationLinks, ParameterNamespace};
use crate::tracker::{ContinuationPageTracker, PageState};
use crate::types::{InteractivityMode, QueryPairs};
use serde::Serialize;

/// Fully resolved pager configuration and state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPager {
    pub state: PageState,
    pub page_size: u32,
    pub token_history: TokenHistory,
    pub max_history_entries: usize,
    pub token_accumulation: bool,
    pub preserve_query_parameters: bool,
    pub namespace: ParameterNamespace,
    pub mode: InteractivityMode,
    pub link_url: Option<String>,
}

/// Resolve the three layers: model > explicit field > default
///
/// Pure: no layer is modified and nothing outside the arguments is read.
/// Page size is clamped into `1..=max_page_size`; a model or explicit
/// history is re-bounded to the resolved history size.
pub fn resolve(
    model: Option<&ContinuationModel>,
    explicit: &PagerOverrides,
    defaults: &PagerSettings,
) -> ResolvedPager {
    let max_history_entries = explicit
        .max_history_entries
        .unwrap_or(defaults.max_history_entries);

    let page_size =
        defaults.clamp_page_size(model.map(|m| m.page_size).or(explicit.page_size));
    let current_page = model
        .map(|m| m.current_page)
        .or(explicit.current_page)
        .unwrap_or(1);
    let next_token = match model {
        Some(m) => m.next_token.clone(),
        None => explicit.next_token.clone(),
    };
    let has_more = model
        .map(|m| m.has_more)
        .or(explicit.has_more)
        .unwrap_or(false);

    let mut token_history = match (
        model.and_then(|m| m.token_history.as_ref()),
        explicit.token_history_json.as_deref(),
    ) {
        (Some(history), _) => history.clone(),
        (None, Some(json)) => TokenHistory::from_json_lossy(json, max_history_entries),
        (None, None) => TokenHistory::with_max_entries(max_history_entries),
    };
    token_history.set_max_entries(max_history_entries);

    let namespace = match explicit.parameter_prefix.as_deref() {
        Some(prefix) => ParameterNamespace::new(Some(prefix)),
        None => defaults.parameter_prefix.clone(),
    };

    ResolvedPager {
        state: PageState::new(current_page, next_token, has_more),
        page_size,
        token_history,
        max_history_entries,
        token_accumulation: explicit
            .token_accumulation
            .unwrap_or(defaults.token_accumulation),
        preserve_query_parameters: explicit
            .preserve_query_parameters
            .unwrap_or(defaults.preserve_query_parameters),
        namespace,
        mode: explicit.mode().unwrap_or(defaults.mode),
        link_url: explicit
            .link_url
            .clone()
            .or_else(|| defaults.link_url.clone()),
    }
}

impl ResolvedPager {
    /// Tracker positioned at the resolved state, seeded with the resolved history
    pub fn tracker(&self) -> ContinuationPageTracker {
        let mut tracker = ContinuationPageTracker::with_history(self.token_history.clone());
        tracker.record_arrival(
            self.state.current_page(),
            None,
            self.state.next_token().map(str::to_string),
            self.state.has_more(),
        );
        tracker
    }

    /// Navigation links for the resolved state
    ///
    /// `fallback_url` is used when no link URL was configured (typically the
    /// current request path).
    pub fn links(&self, fallback_url: &str, preserved: &QueryPairs) -> NavigationLinks {
        let base = self.link_url.as_deref().unwrap_or(fallback_url);
        let mut builder = LinkBuilder::new(base, self.namespace.clone(), self.page_size);
        if self.preserve_query_parameters {
            builder = builder.with_preserved(preserved);
        }
        if self.token_accumulation {
            builder = builder.with_history(&self.token_history);
        }
        builder.navigation(&self.tracker())
    }
}
