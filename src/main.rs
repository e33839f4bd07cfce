//! Monarch Stats — Binary Entrypoint
//! Fetches the monarch dataset (or serves it from the in-memory cache) and
//! prints the four reign statistics.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use monarch_stats::cache::SnapshotCache;
use monarch_stats::config::Settings;
use monarch_stats::report;
use monarch_stats::service::MonarchService;
use monarch_stats::source::HttpMonarchSource;

#[derive(Debug, Parser)]
#[command(
    name = "monarch-stats",
    about = "Reign statistics over the English monarchs dataset"
)]
struct Cli {
    /// Path to a TOML settings file. Falls back to $MONARCHS_CONFIG_PATH,
    /// then config/settings.toml, then built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the dataset URL from settings.
    #[arg(long)]
    url: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();
    init_tracing();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "monarch-stats failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut settings = match cli.config {
        Some(path) => Settings::load_from(&path)?,
        None => Settings::load_default()?,
    };
    if let Some(url) = cli.url {
        settings.data_url = url;
    }

    tracing::info!(
        url = %settings.data_url,
        cache_mins = settings.cache_duration_mins,
        "starting monarch statistics run"
    );

    let source = HttpMonarchSource::new(&settings.data_url, settings.http_timeout())?;
    let cache = SnapshotCache::with_ttl(settings.cache_duration());
    let service = MonarchService::new(cache, Box::new(source));

    let outcome = service.get_monarchs().await;
    if !outcome.is_usable() {
        anyhow::bail!("monarch fetch failed: {}", outcome.message);
    }
    let monarchs = outcome.payload.unwrap_or_default();

    report::print_statistics(&monarchs, settings.parallel_threshold);
    tracing::info!(records = monarchs.len(), via = %outcome.message, "run complete");

    Ok(())
}
