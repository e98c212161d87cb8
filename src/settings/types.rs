//! Settings types
//!
//! `PagerSettings` is deserialized from configuration files; every field
//! has a default so partial files are valid.

use crate::error::{Error, Result};
use crate::history::{TokenHistory, DEFAULT_MAX_HISTORY_ENTRIES};
use crate::params::ParameterNamespace;
use crate::types::InteractivityMode;
use serde::{Deserialize, Serialize};

/// Page size used when nothing else specifies one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size a request may ask for
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;

// ============================================================================
// Defaults Layer
// ============================================================================

/// Pager defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagerSettings {
    /// Items per page
    pub page_size: u32,

    /// Upper clamp for requested page sizes
    pub max_page_size: u32,

    /// Page tokens kept for backward navigation (0 = unlimited)
    pub max_history_entries: usize,

    /// Record tokens and carry the history on links
    pub token_accumulation: bool,

    /// Keep unrelated query parameters on generated links
    pub preserve_query_parameters: bool,

    /// Prefix for this pager's query keys
    pub parameter_prefix: ParameterNamespace,

    /// Client-side interactivity
    pub mode: InteractivityMode,

    /// Base URL for generated links
    pub link_url: Option<String>,
}

impl Default for PagerSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            max_history_entries: DEFAULT_MAX_HISTORY_ENTRIES,
            token_accumulation: true,
            preserve_query_parameters: true,
            parameter_prefix: ParameterNamespace::none(),
            mode: InteractivityMode::default(),
            link_url: None,
        }
    }
}

impl PagerSettings {
    /// Check the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.max_page_size == 0 {
            return Err(Error::invalid_value("max_page_size", "must be at least 1"));
        }
        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be at least 1"));
        }
        if self.page_size > self.max_page_size {
            return Err(Error::invalid_value(
                "page_size",
                format!(
                    "{} exceeds max_page_size {}",
                    self.page_size, self.max_page_size
                ),
            ));
        }
        Ok(())
    }

    /// Clamp a requested page size into `1..=max_page_size`
    ///
    /// `None` yields the configured page size.
    pub fn clamp_page_size(&self, requested: Option<u32>) -> u32 {
        let max = self.max_page_size.max(1);
        requested.unwrap_or(self.page_size).clamp(1, max)
    }
}

// ============================================================================
// Explicit Field Layer
// ============================================================================

/// Individually set pager fields
///
/// `None` means "not set here"; the defaults layer fills it in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerOverrides {
    pub page_size: Option<u32>,
    pub current_page: Option<u32>,
    pub next_token: Option<String>,
    pub has_more: Option<bool>,
    /// JSON token history as round-tripped by the client
    pub token_history_json: Option<String>,
    pub max_history_entries: Option<usize>,
    pub token_accumulation: Option<bool>,
    pub preserve_query_parameters: Option<bool>,
    pub parameter_prefix: Option<String>,
    pub mode: Option<InteractivityMode>,
    /// Legacy HTMX switch, consulted only when `mode` is unset
    pub use_htmx: Option<bool>,
    /// Legacy no-JS view switch, consulted only when `mode` is unset
    pub no_js_view: Option<bool>,
    pub link_url: Option<String>,
}

impl PagerOverrides {
    /// Create an empty override set
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective mode from this layer, if it sets one
    pub(super) fn mode(&self) -> Option<InteractivityMode> {
        if self.mode.is_some() {
            return self.mode;
        }
        match (self.use_htmx, self.no_js_view) {
            (None, None) => None,
            (use_htmx, no_js_view) => Some(InteractivityMode::from_legacy(
                use_htmx.unwrap_or(true),
                no_js_view.unwrap_or(false),
            )),
        }
    }
}

// ============================================================================
// Model Layer
// ============================================================================

/// Paging values carried by a data model
///
/// When a model is supplied, its values take precedence over explicit
/// fields; `token_history` falls through when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuationModel {
    pub next_token: Option<String>,
    pub has_more: bool,
    pub page_size: u32,
    pub current_page: u32,
    pub token_history: Option<TokenHistory>,
}

impl ContinuationModel {
    /// Model for a fetched page
    pub fn new(
        current_page: u32,
        page_size: u32,
        next_token: Option<String>,
        has_more: bool,
    ) -> Self {
        Self {
            next_token,
            has_more,
            page_size,
            current_page,
            token_history: None,
        }
    }

    /// Attach a token history
    #[must_use]
    pub fn with_history(mut self, history: TokenHistory) -> Self {
        self.token_history = Some(history);
        self
    }
}
