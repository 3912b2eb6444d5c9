//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// linkdeck - A fast, friendly TUI start page for your categorized links
#[derive(Parser, Clone, Debug)]
#[command(name = "linkdeck")]
#[command(version)]
#[command(
    about = "A fast, friendly TUI start page for browsing, searching and launching your categorized links",
    long_about = None
)]
pub struct Args {
    /// Log links instead of opening them in a browser
    #[arg(long)]
    pub dry_run: bool,

    /// Path to the links catalog (default: ~/.config/linkdeck/links.toml)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Effective log level: `--verbose` wins over `--log-level`.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
