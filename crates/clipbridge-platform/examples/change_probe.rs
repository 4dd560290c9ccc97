//! Watch the system clipboard and print change signals as they arrive.
//!
//! Run with `cargo run -p clipbridge-platform --example change_probe`,
//! then copy text or images and select text in another window.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use clipbridge_core::clipboard::ChangeSignal;
use clipbridge_core::config::WatcherConfig;
use clipbridge_core::ports::{SystemClipboardPort, WatcherControlPort};
use clipbridge_platform::{SystemChangeWatcher, SystemClipboard};

#[tokio::main]
async fn main() -> Result<()> {
    let config = WatcherConfig::default();
    let port: Arc<dyn SystemClipboardPort> = Arc::new(SystemClipboard::new()?);

    println!("change_probe: watching clipboard (Ctrl+C to stop)");
    println!("- supports_selection: {}", port.supports_selection());

    let (tx, mut rx) = mpsc::channel(config.channel_capacity);
    let watcher = SystemChangeWatcher::new(port.clone(), tx, config);
    watcher.start_watcher().await?;

    let mut count = 0usize;
    while let Some(signal) = rx.recv().await {
        count += 1;
        match signal {
            ChangeSignal::Primary => {
                let text = port.text()?;
                let has_image = port.has_image()?;
                println!(
                    "#{count} primary changed: has_image={has_image} text={:?}",
                    preview(&text)
                );
            }
            ChangeSignal::Selection => {
                let selection = port.selection()?;
                println!("#{count} selection changed: {:?}", preview(&selection));
            }
        }
    }

    Ok(())
}

fn preview(text: &str) -> String {
    let mut preview: String = text.chars().take(60).collect();
    if text.chars().count() > 60 {
        preview.push_str("...");
    }
    preview
}
