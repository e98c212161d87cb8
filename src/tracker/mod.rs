//! Continuation page tracker module
//!
//! Turns the outcome of each page fetch into navigable state and keeps
//! enough token history to offer "Previous" over a cursor API that only
//! knows "Next".
//!
//! # Overview
//!
//! - `PageState` - current page, next token, and whether more rows exist
//! - `ContinuationPageTracker` - owns the state plus a `TokenHistory`
//! - `TrackerPhase` - `AtOrigin` (page 1) or `Navigated` (page > 1)

mod page_tracker;
mod types;

pub use page_tracker::{can_go_forward, ContinuationPageTracker};
pub use types::{Navigation, PageState, TrackerPhase};
