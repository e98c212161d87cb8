// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # Continuation Pager
//!
//! Page navigation for data sources that only hand out opaque "next page"
//! tokens. Going forward is easy; going back needs the token that produced
//! the earlier page, so the pager carries a bounded token history between
//! requests.
//!
//! ## Features
//!
//! - **Token history**: page → token map, serialized as compact JSON, evicting
//!   the oldest pages past a configurable bound
//! - **Page tracking**: previous-token lookup and back/forward availability
//! - **Query parameters**: optional prefixes so several pagers share one URL
//! - **Settings**: model → explicit → default resolution, YAML/JSON files
//! - **Sessions**: parse a request, fetch once, build first/previous/next links
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use continuation_pager::{MemorySource, PagerSession, PagerSettings, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let source = MemorySource::new((1..=500).collect::<Vec<u32>>());
//!     let session = PagerSession::new(&source, PagerSettings::default())
//!         .with_base_url("/products");
//!
//!     let page = session.handle_query_str("").await?;
//!     if let Some(next) = &page.links.next {
//!         println!("next page: {next}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         PagerSession                         │
//! │   query string → fetch → record arrival → navigation links   │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌────────────┬─────────────────┼──────────────┬────────────────┐
//! │  params    │    tracker      │   history    │    source      │
//! ├────────────┼─────────────────┼──────────────┼────────────────┤
//! │ Namespace  │ PageState       │ TokenHistory │ Continuation-  │
//! │ PagerQuery │ previous token  │ JSON codec   │   Source       │
//! │ Links      │ back / forward  │ eviction     │ MemorySource   │
//! └────────────┴─────────────────┴──────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Bounded page → token history
pub mod history;

/// Continuation page tracking
pub mod tracker;

/// Query parameter naming, parsing and link building
pub mod params;

/// Pager settings and resolution
pub mod settings;

/// Continuation-token data sources
pub mod source;

/// Request-scoped pager sessions
pub mod session;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use history::TokenHistory;
pub use params::{LinkBuilder, NavigationLinks, ParameterNamespace, PagerQuery};
pub use session::{PageView, PagerSession};
pub use settings::{load_settings, resolve, PagerOverrides, PagerSettings, ResolvedPager};
pub use source::{ContinuationSource, MemorySource, PageFetch};
pub use tracker::{ContinuationPageTracker, Navigation, PageState, TrackerPhase};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
