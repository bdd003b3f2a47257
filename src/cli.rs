use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "studyflow")]
#[command(about = "Pomodoro timer for the terminal")]
pub struct Cli {
    /// Configuration file path (default: $XDG_CONFIG_HOME/studyflow/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "studyflow=trace" (overrides the config file)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Runs the timer when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start the interactive timer
    Run,

    /// Show where config and log files are stored
    Paths,

    /// Print the effective configuration as TOML
    Config,
}
