//! Upstream data source module
//!
//! The contract a forward-only paged store fulfils: given a page size and
//! an optional continuation token, return one page of items, the next
//! token, and whether more rows exist.
//!
//! # Overview
//!
//! - `ContinuationSource` - async trait implemented per backing store
//! - `PageFetch` - one page of results
//! - `MemorySource` - in-memory store issuing base64 offset tokens

mod memory;
mod types;

pub use memory::MemorySource;
pub use types::{ContinuationSource, PageFetch};
