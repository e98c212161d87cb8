//! CLI module
//!
//! Command-line interface for exercising the pager.
//!
//! # Commands
//!
//! - `walk` - Page through an in-memory source by following generated links
//! - `decode` - Inspect a `tokenHistory` payload
//! - `settings` - Print the effective pager settings

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, Step};
pub use runner::{Runner, StepReport};
