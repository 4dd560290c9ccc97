//! Polling clipboard watcher.
//!
//! Observes both buffers through `SystemClipboardPort` alone, which makes
//! it portable across platforms and runnable against a fake port in
//! tests. Change detection fingerprints the primary buffer (text,
//! image-typed flag, and pixel bytes when an image is present) and
//! compares selection text directly; identical consecutive probes emit
//! nothing.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use anyhow::Result;
use async_trait::async_trait;
use tokio::{task::JoinHandle, time::interval};
use tracing::warn;

use clipbridge_core::clipboard::{ChangeSignal, ChangeSignalSender};
use clipbridge_core::config::WatcherConfig;
use clipbridge_core::ports::{SystemClipboardPort, WatcherControlPort, WatcherError};

pub struct PollingWatcher {
    port: Arc<dyn SystemClipboardPort>,
    tx: ChangeSignalSender,
    config: WatcherConfig,
    running: AtomicBool,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl PollingWatcher {
    pub fn new(
        port: Arc<dyn SystemClipboardPort>,
        tx: ChangeSignalSender,
        config: WatcherConfig,
    ) -> Self {
        Self {
            port,
            tx,
            config,
            running: AtomicBool::new(false),
            task: Mutex::new(None),
        }
    }

    fn shutdown_now(&self) {
        if !self.running.swap(false, Ordering::AcqRel) {
            return;
        }

        if let Some(task) = self.task.lock().unwrap().take() {
            task.abort();
        }
    }
}

fn primary_fingerprint(port: &dyn SystemClipboardPort) -> Result<u64> {
    let mut hasher = DefaultHasher::new();

    port.text()?.hash(&mut hasher);

    let has_image = port.has_image()?;
    has_image.hash(&mut hasher);
    if has_image {
        port.image()?.rgba().hash(&mut hasher);
    }

    Ok(hasher.finish())
}

#[async_trait]
impl WatcherControlPort for PollingWatcher {
    async fn start_watcher(&self) -> Result<(), WatcherError> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(()); // already running
        }

        let port = self.port.clone();
        let tx = self.tx.clone();
        let poll_interval = self.config.poll_interval();
        let watch_selection = port.supports_selection();

        let task = tokio::spawn(async move {
            // baseline, so existing content does not fire at startup
            let mut last_primary = primary_fingerprint(port.as_ref()).ok();
            let mut last_selection = if watch_selection {
                port.selection().ok()
            } else {
                None
            };

            let mut ticker = interval(poll_interval);

            loop {
                ticker.tick().await;

                match primary_fingerprint(port.as_ref()) {
                    Ok(fingerprint) => {
                        let changed = last_primary.is_some_and(|last| last != fingerprint);
                        last_primary = Some(fingerprint);
                        if changed && tx.send(ChangeSignal::Primary).await.is_err() {
                            break; // receiver gone
                        }
                    }
                    Err(err) => warn!(error = %err, "clipboard probe failed"),
                }

                if watch_selection {
                    match port.selection() {
                        Ok(current) => {
                            let changed = last_selection
                                .as_deref()
                                .is_some_and(|last| last != current);
                            last_selection = Some(current);
                            if changed && tx.send(ChangeSignal::Selection).await.is_err() {
                                break;
                            }
                        }
                        Err(err) => warn!(error = %err, "selection probe failed"),
                    }
                }
            }
        });

        *self.task.lock().unwrap() = Some(task);

        Ok(())
    }

    async fn stop_watcher(&self) -> Result<(), WatcherError> {
        self.shutdown_now();
        Ok(())
    }
}

impl Drop for PollingWatcher {
    fn drop(&mut self) {
        self.shutdown_now();
    }
}
