use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod config;
mod controller;
mod events;
mod io;
mod page;
mod report;

#[cfg(test)]
mod tests;

use crate::controller::AppController;
use crate::io::EventSource;

/// Replay recorded hover input over a plain-text page and print the
/// resulting popup chain
#[derive(Parser, Debug)]
#[command(name = "lexihover", version, about, long_about = None)]
struct Args {
    /// Plain-text page, one text node per line
    page: PathBuf,

    /// JSON-lines input events, read from stdin when omitted
    #[arg(short, long)]
    events: Option<PathBuf>,

    /// Config file (defaults to ./lexihover.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dictionary asset, overrides the configured path
    #[arg(short, long)]
    dictionary: Option<PathBuf>,
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Env overrides may come from a .env file
    dotenvy::dotenv().ok();

    let mut config = config::load_config(args.config.as_deref())?;
    if let Some(path) = &args.dictionary {
        config.dictionary.path = path.display().to_string();
    }

    init_tracing(&config.log_filter);

    let text = tokio::fs::read_to_string(&args.page)
        .await
        .with_context(|| format!("Failed to read page {}", args.page.display()))?;

    let source = match args.events {
        Some(path) => EventSource::File(path),
        None => EventSource::Stdin,
    };

    let controller = AppController::new(config);
    let report = controller.run(&text, source).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
