//! CLI commands and argument parsing

use crate::error::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// Continuation pager CLI
#[derive(Parser, Debug)]
#[command(name = "continuation-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pager settings file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk an in-memory source with a sequence of navigation steps
    Walk {
        /// Number of items in the source
        #[arg(long, default_value = "500")]
        items: usize,

        /// Items per page (overrides the settings file)
        #[arg(long)]
        page_size: Option<u32>,

        /// Comma-separated steps: next, prev, first
        #[arg(long, default_value = "next,next,next,prev")]
        steps: String,

        /// Page tokens kept for backward navigation, 0 = unlimited
        #[arg(long)]
        max_history: Option<usize>,

        /// Query parameter prefix
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Decode a token history payload the way a request would
    Decode {
        /// History JSON, e.g. '{"2":"A","3":"B"}'
        history: String,

        /// Page tokens kept, 0 = unlimited
        #[arg(long, default_value = "20")]
        max_history: usize,

        /// Also report the "Previous" token from this page
        #[arg(long)]
        page: Option<u32>,
    },

    /// Show the effective pager settings
    Settings,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}

/// One navigation step of a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
    First,
}

impl Step {
    /// Parse a comma-separated step list
    pub fn parse_list(steps: &str) -> Result<Vec<Self>> {
        steps
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl FromStr for Step {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "next" | "n" => Ok(Self::Next),
            "prev" | "previous" | "p" => Ok(Self::Previous),
            "first" | "f" => Ok(Self::First),
            other => Err(Error::invalid_value(
                "steps",
                format!("unknown step '{other}' (expected next, prev, first)"),
            )),
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Next => "next",
            Self::Previous => "prev",
            Self::First => "first",
        };
        f.write_str(name)
    }
}
