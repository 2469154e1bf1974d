//! Command-line surface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "staffdesk", version, about = "Employee salary and project staffing desk")]
pub struct Cli {
    /// Log level: trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long, global = true, env = "STAFFDESK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, global = true, env = "STAFFDESK_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Print the final report as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the bundled sample scenario.
    Demo,
    /// Run a scenario plan from a JSON file.
    Run {
        /// Path to the plan.
        file: PathBuf,
    },
    /// Build a scenario from prompts on stdin.
    Interactive,
    /// Print the core version.
    Version,
}
