//! Continuation page tracker implementation

use super::types::{Navigation, PageState, TrackerPhase};
use crate::history::TokenHistory;

/// Whether a "Next" link can be offered
///
/// True iff the source reported more rows and handed out a non-empty token.
pub fn can_go_forward(has_more: bool, next_token: Option<&str>) -> bool {
    has_more && next_token.is_some_and(|t| !t.is_empty())
}

/// Tracks the current page and the tokens needed to walk back to earlier ones
///
/// One tracker per pager per request. The tracker never performs a fetch;
/// it only consumes the `(next_token, has_more)` half of a fetch result.
#[derive(Debug, Clone)]
pub struct ContinuationPageTracker {
    state: PageState,
    history: TokenHistory,
}

impl Default for ContinuationPageTracker {
    fn default() -> Self {
        Self::with_history(TokenHistory::new())
    }
}

impl ContinuationPageTracker {
    /// Create a tracker at the origin with an empty history
    pub fn new(max_history_entries: usize) -> Self {
        Self::with_history(TokenHistory::with_max_entries(max_history_entries))
    }

    /// Create a tracker at the origin seeded with an existing history
    pub fn with_history(history: TokenHistory) -> Self {
        Self {
            state: PageState::origin(),
            history,
        }
    }

    /// Create a tracker from a client round-tripped history payload
    ///
    /// Malformed payloads yield an empty history.
    pub fn from_history_json(json: &str, max_history_entries: usize) -> Self {
        Self::with_history(TokenHistory::from_json_lossy(json, max_history_entries))
    }

    /// Current navigable state
    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Recorded token history
    pub fn history(&self) -> &TokenHistory {
        &self.history
    }

    /// Consume the tracker, keeping only its history
    pub fn into_history(self) -> TokenHistory {
        self.history
    }

    /// Current phase of the state machine
    pub fn phase(&self) -> TrackerPhase {
        if self.state.is_origin() {
            TrackerPhase::AtOrigin
        } else {
            TrackerPhase::Navigated
        }
    }

    /// Record a forward fetch that arrived at `arrived_at_page`
    ///
    /// The token is stored at key `arrived_at_page` when that page is 2 or
    /// higher; page 1 only updates the state. Never fails.
    pub fn record_forward_navigation(
        &mut self,
        arrived_at_page: u32,
        token_used_to_arrive: &str,
        next_token: Option<String>,
        has_more: bool,
    ) {
        if self.history.insert(arrived_at_page, token_used_to_arrive) {
            tracing::debug!(
                page = arrived_at_page,
                entries = self.history.len(),
                "Recorded page token"
            );
        }
        self.state = PageState::new(arrived_at_page, next_token, has_more);
    }

    /// Record any fetch, classifying it against the history
    ///
    /// A fetch using the token already stored for its page is a revisit
    /// (typically "Previous") and leaves the history untouched.
    pub fn record_arrival(
        &mut self,
        page: u32,
        token_used: Option<&str>,
        next_token: Option<String>,
        has_more: bool,
    ) -> Navigation {
        let token = match token_used.filter(|t| !t.is_empty()) {
            Some(token) if page > 1 => token,
            _ => {
                self.state = PageState::new(page, next_token, has_more);
                return Navigation::Origin;
            }
        };

        if self.history.get(page) == Some(token) {
            self.state = PageState::new(page, next_token, has_more);
            return Navigation::Revisit;
        }

        self.record_forward_navigation(page, token, next_token, has_more);
        Navigation::Forward
    }

    /// Token that re-fetches the page before `current_page`
    ///
    /// `None` on page 1, and for pages never walked forward or already
    /// evicted from the history.
    pub fn previous_token(&self, current_page: u32) -> Option<&str> {
        if current_page <= 1 {
            return None;
        }
        self.history.get(current_page - 1)
    }

    /// Whether a "Previous" link can be offered from `current_page`
    pub fn can_go_back(&self, current_page: u32) -> bool {
        current_page > 1 && self.previous_token(current_page).is_some()
    }

    /// Whether the current state offers a "Next" link
    ///
    /// Always false on `u32::MAX`, which has no following page number.
    pub fn can_go_forward(&self) -> bool {
        self.state.current_page() < u32::MAX
            && can_go_forward(self.state.has_more(), self.state.next_token())
    }

    /// Discard the state and history, returning to the origin
    pub fn clear(&mut self) {
        self.history.clear();
        self.state = PageState::origin();
    }
}
