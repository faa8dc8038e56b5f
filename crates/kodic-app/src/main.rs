use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use kodic_config::Config;
use kodic_dict::DictClient;
use kodic_store::{NoopStore, SqliteStore, WordStore};

mod pipeline;
mod watcher;


#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();
    let config = Config::new();

    // Resource initialization failures are fatal; everything after startup
    // logs and carries on.
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)
        .with_context(|| format!("failed to open log file {}", config.log_path))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let store: Arc<dyn WordStore> = if config.cache_enabled {
        let store = SqliteStore::open(&config.db_url())
            .await
            .with_context(|| format!("failed to open word store {}", config.db_path))?;
        Arc::new(store)
    } else {
        tracing::warn!("cache disabled, every lookup hits the network");
        Arc::new(NoopStore)
    };

    let dict = DictClient::new(
        config.api_url.clone(),
        Duration::from_secs(config.http_timeout_secs),
    )
    .context("failed to build dictionary client")?;

    let cancel = CancellationToken::new();
    let watcher = tokio::spawn(watcher::watch_clipboard(
        store,
        Arc::new(dict),
        Duration::from_millis(config.poll_ms),
        cancel.child_token(),
    ));

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("shutdown requested");
            cancel.cancel();
        }
        result = watcher => {
            match result {
                Ok(Ok(())) => tracing::warn!("clipboard watcher exited"),
                Ok(Err(e)) => tracing::error!("clipboard watcher failed: {e}"),
                Err(e) => tracing::error!("clipboard watcher panicked: {e}"),
            }
        }
    }

    Ok(())
}
