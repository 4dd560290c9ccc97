//! Wiring the bridge to the real OS clipboard.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use clipbridge_core::config::WatcherConfig;
use clipbridge_core::ports::{SystemClipboardPort, WatcherControlPort};
use clipbridge_platform::{SystemChangeWatcher, SystemClipboard};

use crate::bridge::ClipboardBridge;

/// Connect a [`ClipboardBridge`] to the system clipboard.
///
/// Builds the platform port, starts the change watcher, and hands the
/// watcher to the bridge so that dropping the bridge tears the whole
/// subscription down.
pub async fn connect_system(config: WatcherConfig) -> Result<ClipboardBridge> {
    let port: Arc<dyn SystemClipboardPort> = Arc::new(SystemClipboard::new()?);

    let (tx, rx) = mpsc::channel(config.channel_capacity);
    let watcher = SystemChangeWatcher::new(port.clone(), tx, config);
    watcher.start_watcher().await?;

    Ok(ClipboardBridge::with_watcher(
        port,
        rx,
        Some(Box::new(watcher)),
    ))
}
