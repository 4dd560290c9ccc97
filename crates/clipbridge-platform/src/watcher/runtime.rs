//! Event-driven clipboard watcher.
//!
//! Registers a handler with the OS clipboard change callback for the
//! primary buffer and drives the blocking watch loop on a background
//! thread. The selection buffer has no OS callback in the backends used,
//! so it is observed by polling its text on a tokio interval.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use clipboard_rs::{ClipboardWatcher as RsClipboardWatcher, ClipboardWatcherContext, WatcherShutdown};
use tokio::{task::JoinHandle, time::interval};
use tracing::{debug, warn};

use super::handler::ChangeForwarder;
use clipbridge_core::clipboard::{ChangeSignal, ChangeSignalSender};
use clipbridge_core::config::WatcherConfig;
use clipbridge_core::ports::{SystemClipboardPort, WatcherControlPort, WatcherError};

pub struct SystemChangeWatcher {
    port: Arc<dyn SystemClipboardPort>,
    tx: ChangeSignalSender,
    config: WatcherConfig,
    running: AtomicBool,
    shutdown: Mutex<Option<WatcherShutdown>>,
    selection_task: Mutex<Option<JoinHandle<()>>>,
}

impl SystemChangeWatcher {
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
            shutdown: Mutex::new(None),
            selection_task: Mutex::new(None),
        }
    }

    fn shutdown_now(&self) {
        if !self.running.swap(false, Ordering::AcqRel) {
            return;
        }

        if let Some(handle) = self.shutdown.lock().unwrap().take() {
            handle.stop();
        }

        if let Some(task) = self.selection_task.lock().unwrap().take() {
            task.abort();
        }
    }
}

#[async_trait]
impl WatcherControlPort for SystemChangeWatcher {
    async fn start_watcher(&self) -> Result<(), WatcherError> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(()); // already running
        }

        let mut watcher_ctx = match ClipboardWatcherContext::new() {
            Ok(ctx) => ctx,
            Err(err) => {
                self.running.store(false, Ordering::Release);
                return Err(WatcherError::StartFailed(format!(
                    "create watcher context: {err}"
                )));
            }
        };

        let shutdown = watcher_ctx
            .add_handler(ChangeForwarder::new(self.tx.clone()))
            .get_shutdown_channel();

        tokio::task::spawn_blocking(move || {
            debug!("clipboard watch started");
            watcher_ctx.start_watch();
            debug!("clipboard watch stopped");
        });

        *self.shutdown.lock().unwrap() = Some(shutdown);

        if self.port.supports_selection() {
            let port = self.port.clone();
            let tx = self.tx.clone();
            let poll_interval = self.config.poll_interval();

            let task = tokio::spawn(async move {
                // baseline, so existing content does not fire at startup
                let mut last = port.selection().unwrap_or_default();
                let mut ticker = interval(poll_interval);

                loop {
                    ticker.tick().await;

                    let current = match port.selection() {
                        Ok(text) => text,
                        Err(err) => {
                            warn!(error = %err, "failed to read selection buffer");
                            continue;
                        }
                    };

                    if current != last {
                        last = current;
                        if tx.send(ChangeSignal::Selection).await.is_err() {
                            break; // receiver gone, nothing left to notify
                        }
                    }
                }
            });

            *self.selection_task.lock().unwrap() = Some(task);
        }

        Ok(())
    }

    async fn stop_watcher(&self) -> Result<(), WatcherError> {
        self.shutdown_now();
        Ok(())
    }
}

impl Drop for SystemChangeWatcher {
    fn drop(&mut self) {
        self.shutdown_now();
    }
}
