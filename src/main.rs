use anyhow::{Context, Result};
use clap::Parser;
use clasy_deck::cli::Cli;
use clasy_deck::config::Config;
use clasy_deck::logging::init_tracing;
use clasy_deck::slides::SlideRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::read_from(path)?,
        None => Config::read()?,
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    if cli.list {
        for (index, title) in SlideRegistry::clasy().titles().enumerate() {
            println!("{}. {title}", index + 1);
        }
        return Ok(());
    }

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    match init_tracing(&config.logging) {
        Ok(path) => tracing::info!(
            log = %path.display(),
            config = %config_path.display(),
            transition_ms = config.deck.transition_ms,
            "logging initialised"
        ),
        Err(err) => eprintln!("Warning: {err}; continuing without a log file"),
    }

    clasy_deck::ui::run(&config)
        .await
        .context("terminal session failed")?;
    Ok(())
}
