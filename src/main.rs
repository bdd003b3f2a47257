mod cli;
mod config;
mod logging;
mod paths;
mod timer;
mod tui;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use cli::{Cli, Command};
use console::style;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            let filter = cli
                .log_level
                .as_deref()
                .unwrap_or(&config.logging.filter);
            logging::init(&config.logging.log_path(), filter)?;
            run_timer(&config)
        }

        Command::Paths => {
            println!("Config: {}", paths::config_file().display());
            println!("Log:    {}", config.logging.log_path().display());
            Ok(())
        }

        Command::Config => {
            let rendered = toml::to_string_pretty(&config)
                .context("Failed to render configuration")?;
            print!("{rendered}");
            Ok(())
        }
    }
}

/// Run the interactive screen, then print a short session summary.
fn run_timer(config: &config::AppConfig) -> Result<()> {
    let started = Local::now();
    tracing::info!("session started");

    let mut terminal = tui::init().context("Failed to initialize terminal")?;
    let outcome = tui::screens::pomodoro::run(&mut terminal, &config.ui);
    tui::restore().context("Failed to restore terminal")?;
    let outcome = outcome?;

    let ended = Local::now();
    tracing::info!(cycles = outcome.completed_cycles, "session ended");

    println!();
    println!("{}", style("=== Session summary ===").bold());
    println!();
    println!(
        "  Completed pomodoros: {}",
        style(outcome.completed_cycles).magenta().bold()
    );
    println!(
        "  {} - {}",
        started.format("%H:%M"),
        ended.format("%H:%M")
    );
    println!();
    Ok(())
}
