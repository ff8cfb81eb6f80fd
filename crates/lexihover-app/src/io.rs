use std::path::{Path, PathBuf};
use std::sync::Arc;

use kanal::AsyncSender;
use lexihover_config::dictionary::DictionaryConfig;
use lexihover_core::LoadError;
use lexihover_lang_dutch::{DictionaryLoader, DutchDictionary};
use lexihover_types::InputEvent;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::Notify;
use tokio::task::JoinError;
use tokio_util::sync::CancellationToken;

use crate::events::AppEvent;

#[derive(Debug, Clone)]
pub enum EventSource {
    Stdin,
    File(PathBuf),
}

/// Load the dictionary off the runtime and report the result. `settled` is
/// notified once the result is queued, ahead of any input.
pub async fn load_dictionary(
    config: DictionaryConfig,
    settled: Arc<Notify>,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let event = if config.enabled {
        let loaded = tokio::task::spawn_blocking(move || {
            DictionaryLoader::load_with_additional(Path::new(&config.path), &config.additional_paths)
        })
        .await;
        loaded_event(loaded)
    } else {
        tracing::warn!("Dictionary disabled, lookups will find nothing");
        AppEvent::DictionaryFailed("dictionary disabled".to_string())
    };

    let sent = event_tx.send(event).await;
    settled.notify_one();
    sent?;

    Ok(())
}

/// Every outcome of the loader task settles the dictionary, panics included
pub fn loaded_event(loaded: Result<Result<DutchDictionary, LoadError>, JoinError>) -> AppEvent {
    match loaded {
        Ok(Ok(dictionary)) => AppEvent::DictionaryLoaded(Arc::new(dictionary)),
        Ok(Err(e)) => {
            tracing::error!("Failed to load dictionary: {}", e);
            AppEvent::DictionaryFailed(e.to_string())
        }
        Err(e) => {
            tracing::error!("Dictionary loader task failed: {}", e);
            AppEvent::DictionaryFailed(e.to_string())
        }
    }
}

/// Forward input events once the dictionary has settled, then close input
pub async fn read_input(
    source: EventSource,
    settled: Arc<Notify>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tokio::select! {
        _ = settled.notified() => {}
        _ = cancel.cancelled() => return Ok(()),
    }

    let result = match source {
        EventSource::Stdin => {
            tracing::info!("Reading input events from stdin");
            forward_events(BufReader::new(tokio::io::stdin()), &cancel, &event_tx).await
        }
        EventSource::File(path) => {
            tracing::info!("Reading input events from {}", path.display());
            match tokio::fs::File::open(&path).await {
                Ok(file) => forward_events(BufReader::new(file), &cancel, &event_tx).await,
                Err(e) => Err(anyhow::anyhow!(
                    "Failed to open events {}: {}",
                    path.display(),
                    e
                )),
            }
        }
    };

    // Nobody is receiving once cancelled
    if !cancel.is_cancelled() {
        event_tx.send(AppEvent::InputClosed).await?;
    }

    let forwarded = result?;
    tracing::info!("Forwarded {} input events", forwarded);
    Ok(())
}

/// Parse JSON-lines events and send them on. Blank lines and `#` comments
/// are skipped; malformed lines are logged and skipped.
pub async fn forward_events<R: AsyncBufRead + Unpin>(
    reader: R,
    cancel: &CancellationToken,
    event_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<usize> {
    let mut lines = reader.lines();
    let mut line_no = 0;
    let mut forwarded = 0;

    loop {
        let line = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            break;
        };
        line_no += 1;

        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let event: InputEvent = match serde_json::from_str(line) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!("Skipping malformed event on line {}: {}", line_no, e);
                continue;
            }
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            sent = event_tx.send(AppEvent::Input(event)) => sent?,
        }
        forwarded += 1;
    }

    if cancel.is_cancelled() {
        tracing::info!("Input reader stopping");
    }

    Ok(forwarded)
}
