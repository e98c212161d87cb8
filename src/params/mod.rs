//! Query parameter module
//!
//! The query-string surface of a continuation pager: which keys carry the
//! page number, token, page size, and token history, how a prefix renames
//! them, and how navigation links are written back out.
//!
//! # Overview
//!
//! - `ParameterNamespace` - `{prefix}_name` key convention for multiple pagers
//! - `PagerQuery` - incoming request parameters, parsed leniently
//! - `LinkBuilder` - outgoing first/previous/next links

mod links;
mod namespace;
mod query;

pub use links::{LinkBuilder, NavigationLinks};
pub use namespace::{
    ParameterNamespace, CURRENT_PAGE_PARAM, PAGE_SIZE_PARAM, PAGE_TOKEN_PARAM, TOKEN_HISTORY_PARAM,
};
pub use query::PagerQuery;
