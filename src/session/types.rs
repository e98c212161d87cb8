//! Session output types

use crate::params::NavigationLinks;
use crate::tracker::{Navigation, PageState};
use serde::Serialize;

/// Everything a host page needs to show one page and its pager
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub state: PageState,
    pub page_size: u32,
    pub navigation: Navigation,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub previous_token: Option<String>,
    /// Serialized history to round-trip, `None` when accumulation is off
    pub token_history: Option<String>,
    pub links: NavigationLinks,
}

impl<T> PageView<T> {
    /// 1-based page being viewed
    pub fn current_page(&self) -> u32 {
        self.state.current_page()
    }
}
