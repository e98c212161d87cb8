//! Pager session module
//!
//! One request's worth of continuation paging: parse the pager's query
//! parameters, fetch a single page from the source, record the navigation,
//! and produce a serializable view with first/previous/next links.

mod pager;
mod types;

pub use pager::PagerSession;
pub use types::PageView;

#[cfg(test)]
mod tests;
