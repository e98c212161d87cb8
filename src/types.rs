//! Common types used throughout continuation-pager
//!
//! Shared enums and type aliases used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// Decoded query string pairs, in request order
pub type QueryPairs = Vec<(String, String)>;

// ============================================================================
// Interactivity Mode
// ============================================================================

/// Client-side interactivity used by a pager's host page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractivityMode {
    /// HTMX partial updates
    #[default]
    Htmx,
    /// HTMX with Alpine.js
    HtmxWithAlpine,
    /// Alpine.js only
    Alpine,
    /// Plain JavaScript, no framework
    PlainJs,
    /// Standard links and forms only
    NoJs,
}

impl InteractivityMode {
    /// Map the legacy `use_htmx` / no-JS-view flags onto a mode
    ///
    /// A no-JS view always wins; otherwise `use_htmx` picks HTMX over plain
    /// JavaScript.
    pub fn from_legacy(use_htmx: bool, no_js_view: bool) -> Self {
        if no_js_view {
            Self::NoJs
        } else if use_htmx {
            Self::Htmx
        } else {
            Self::PlainJs
        }
    }

    /// Whether navigation needs client-side script at all
    pub fn requires_script(&self) -> bool {
        !matches!(self, Self::NoJs)
    }

    /// Whether HTMX request headers are expected
    pub fn uses_htmx(&self) -> bool {
        matches!(self, Self::Htmx | Self::HtmxWithAlpine)
    }
}

impl std::str::FromStr for InteractivityMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "htmx" => Ok(Self::Htmx),
            "htmxwithalpine" => Ok(Self::HtmxWithAlpine),
            "alpine" => Ok(Self::Alpine),
            "plainjs" => Ok(Self::PlainJs),
            "nojs" => Ok(Self::NoJs),
            other => Err(crate::Error::invalid_value(
                "mode",
                format!("unknown interactivity mode '{other}'"),
            )),
        }
    }
}
