//! rollcall - pick 40 participants from a pasted roster

mod cli;
mod logging;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use rollcall_core::{normalize, Config, Sampler, Selector, SystemClock};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init_tracing(&log_path)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "rollcall starting");

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;

    let sampler = match cli.seed {
        Some(seed) => Sampler::seeded(seed),
        None => Sampler::new(),
    };

    // Plain mode reads stdin when no file is given
    let roster = match (&cli.file, cli.plain) {
        (Some(path), _) => Some(cli::read_roster(path)?),
        (None, true) => Some(cli::read_roster(std::path::Path::new("-"))?),
        (None, false) => None,
    };

    if cli.plain {
        return run_plain(sampler, roster.as_deref().unwrap_or_default());
    }

    let theme = cli.theme.as_deref().unwrap_or(&config.theme);
    let selector = Selector::new(SystemClock, sampler, config.animation.timing());
    let mut app = tui::App::new(selector, theme);
    if let Some(text) = roster.as_deref() {
        app = app.with_roster(text);
    }

    let result = tui::run(app).await;
    tracing::info!("rollcall exiting");
    result
}

/// Select once and print the numbered list
fn run_plain(mut sampler: Sampler, roster: &str) -> Result<()> {
    let candidates = normalize(roster);
    let picked = sampler.select(&candidates)?;
    tracing::info!(
        candidates = candidates.len(),
        selected = picked.len(),
        "Plain selection"
    );
    print!("{}", cli::format_plain(&picked));
    Ok(())
}
