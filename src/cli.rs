//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

/// Daytrip - day-trip research and briefing generator
#[derive(Parser)]
#[command(
    name = "daytrip",
    about = "Generate a day-trip briefing from web search and LLM synthesis",
    version,
    after_help = "Logs are written to: ~/.local/share/daytrip/logs/daytrip.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute (defaults to the interactive prompt flow)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a briefing in one shot from flags (the form-style flow)
    Plan {
        /// Destination city
        #[arg(long)]
        city: String,

        /// Comma-separated interests
        #[arg(long)]
        interests: String,
    },

    /// Prompt for city and interests line by line, then generate
    Interactive,
}

/// Get the log file path
pub fn get_log_path() -> PathBuf {
    debug!("get_log_path: called");
    let path = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("daytrip")
        .join("logs")
        .join("daytrip.log");
    debug!(?path, "get_log_path: returning path");
    path
}
