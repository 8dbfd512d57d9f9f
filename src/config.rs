//! Configuration and CLI argument handling

use std::{path::PathBuf, time::Duration};

use clap::Parser;

/// Focus session length in minutes
pub const FOCUS_MINUTES: u64 = 30;
/// Break session length in minutes
pub const BREAK_MINUTES: u64 = 10;
/// Scheduler cadence; every tick removes this much from the countdown
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "focus-tray")]
#[command(about = "A tray-style focus/break countdown timer")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Directory containing default.png and in-progress.png tray icons
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Only update the tray title, never re-render the menu block
    #[arg(long)]
    pub no_menu: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Tracing filter directive for this crate
    pub fn log_filter(&self) -> String {
        format!("focus_tray={}", self.log_level())
    }
}
