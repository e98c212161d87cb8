//! Token history module
//!
//! Stores the continuation tokens used to arrive at previously visited pages
//! so that a forward-only cursor API can be walked backwards.
//!
//! # Overview
//!
//! - `TokenHistory` - bounded page number → token map, evicting the smallest
//!   page numbers first once the bound is exceeded
//! - JSON round-trip in the `{"2":"<token>","3":"<token>"}` shape, with a
//!   lossy decoder that turns malformed payloads into an empty history

mod codec;
mod types;

pub use types::{TokenHistory, DEFAULT_MAX_HISTORY_ENTRIES, FIRST_RECORDABLE_PAGE};

#[cfg(test)]
mod tests;
