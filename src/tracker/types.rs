//! Tracker state types

use serde::Serialize;

/// Navigable state after one fetch
///
/// Immutable per navigation step; the tracker replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    current_page: u32,
    next_token: Option<String>,
    has_more: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self::origin()
    }
}

impl PageState {
    /// Build a state, clamping the page to 1 and normalizing empty tokens
    ///
    /// `has_more` only holds when the source confirmed more rows AND handed
    /// out a non-empty next token.
    pub fn new(current_page: u32, next_token: Option<String>, has_more: bool) -> Self {
        let next_token = next_token.filter(|t| !t.is_empty());
        Self {
            current_page: current_page.max(1),
            has_more: has_more && next_token.is_some(),
            next_token,
        }
    }

    /// State of a fresh pager before anything was fetched
    pub fn origin() -> Self {
        Self::new(1, None, false)
    }

    /// 1-based page being viewed
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Token fetching the page after this one
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    /// Whether more pages exist
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether this is the first page
    pub fn is_origin(&self) -> bool {
        self.current_page == 1
    }
}

/// Phase of a tracker's state machine
///
/// There is no terminal phase; a tracker lives as long as its UI session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerPhase {
    /// Page 1, backward navigation impossible
    AtOrigin,
    /// Page > 1
    Navigated,
}

/// How a fetch relates to the recorded history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
    /// First page, or a page reached without a token
    Origin,
    /// New page reached with a token; the token was recorded
    Forward,
    /// Page reached with the token already recorded for it
    Revisit,
}

impl Navigation {
    /// Check if the fetch added to the history
    pub fn recorded(&self) -> bool {
        matches!(self, Self::Forward)
    }
}
