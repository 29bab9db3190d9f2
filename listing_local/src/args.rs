//! Command-line arguments for the local monitoring runner.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Seconds between monitoring ticks.
    #[clap(long, default_value_t = 300)]
    pub interval_secs: u64,

    /// Run a single tick and exit instead of looping.
    #[clap(long)]
    pub once: bool,

    /// Plain-text log file written in addition to stderr output.
    #[clap(long, default_value = "listing_monitor.log")]
    pub log_file: String,

    /// Optional JSON file for persisting monitoring state between runs.
    #[clap(long)]
    pub state_file: Option<String>,
}
