use std::sync::Arc;
use std::time::Duration;

use kodic_core::WordFilter;
use kodic_dict::MeansSource;
use kodic_io::clipboard::ClipboardReader;
use kodic_store::WordStore;
use tokio_util::sync::CancellationToken;

use crate::pipeline::run_cycle;

/// Poll the clipboard until cancelled. One full pipeline pass per poll; the
/// interval is counted from the end of the pass, so a slow lookup delays the
/// next read instead of piling up passes.
pub async fn watch_clipboard(
    store: Arc<dyn WordStore>,
    dict: Arc<dyn MeansSource>,
    interval: Duration,
    cancel: CancellationToken,
) -> Result<(), anyhow::Error> {
    let mut clipboard = ClipboardReader::new()?;
    let mut filter = WordFilter::new();

    tracing::info!("clipboard watcher started");
    loop {
        match clipboard.read_text() {
            Ok(text) if !text.is_empty() => {
                if let Some(word) = filter.accept(&text)
                    && let Some(means) = run_cycle(&word, store.as_ref(), dict.as_ref()).await
                {
                    // Fire and forget; shutdown does not wait for the
                    // notification daemon.
                    tokio::task::spawn_blocking(move || kodic_io::notify::notify(&word, &means));
                }
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("cannot read clipboard: {e}"),
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = cancel.cancelled() => {
                tracing::info!("clipboard watcher stopping");
                return Ok(());
            }
        }
    }
}
