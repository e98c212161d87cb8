//! Pager settings module
//!
//! Layered configuration for a continuation pager: file-level defaults,
//! explicitly set fields, and values carried by a data model, resolved in
//! that order of increasing precedence by a pure function.
//!
//! # Overview
//!
//! - `PagerSettings` - defaults, loadable from YAML or JSON
//! - `PagerOverrides` - individually set fields (all optional)
//! - `ContinuationModel` - paging values carried by a data model
//! - `resolve` - model > explicit field > default

mod loader;
mod resolve;
mod types;

pub use loader::{load_settings, load_settings_from_str, SettingsFormat};
pub use resolve::{resolve, ResolvedPager};
pub use types::{
    ContinuationModel, PagerOverrides, PagerSettings, DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE,
};
