use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stockroom::catalog::{CatalogAction, CatalogEffects, FixtureGateway, HttpProductGateway};
use stockroom::config::Config;
use stockroom::state::AppState;
use stockroom::store::Store;
use stockroom::ui;

#[derive(Parser, Debug)]
#[command(name = "stockroom", about = "Terminal product catalog demo")]
struct Args {
    /// Path to an explicit config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the product API base URL.
    #[arg(long)]
    api_url: Option<String>,

    /// Use the bundled sample catalog instead of the HTTP API.
    #[arg(long)]
    offline: bool,

    /// Write debug logs to the cache directory.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.debug {
        init_logging()?;
    }

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let base_url = args
        .api_url
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());

    // Composition root: the one store everything shares.
    let store = Store::new(AppState::from_config(&config));

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let _effects = {
        let _enter = runtime.enter();
        if args.offline {
            CatalogEffects::spawn(store.clone(), FixtureGateway::sample())
        } else {
            CatalogEffects::spawn(store.clone(), HttpProductGateway::new(base_url))
        }
    };

    // The product shell requests a load as soon as it comes up.
    store.dispatch(CatalogAction::Load.into());

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    ui::runtime::run(store, tick_rate)?;

    runtime.shutdown_background();
    Ok(())
}

fn init_logging() -> anyhow::Result<()> {
    let dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("stockroom");
    fs::create_dir_all(&dir).context("failed to create log directory")?;
    let file = fs::File::create(dir.join("stockroom.log")).context("failed to create log file")?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stockroom=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
