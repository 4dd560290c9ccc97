//! Polling watcher behavior against an in-memory clipboard port.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time::timeout;

use clipbridge_core::clipboard::{ChangeSignal, ImageData};
use clipbridge_core::config::WatcherConfig;
use clipbridge_core::ports::{SystemClipboardPort, WatcherControlPort};
use clipbridge_platform::PollingWatcher;

struct MemoryClipboard {
    state: Mutex<MemoryState>,
    selection_supported: bool,
}

struct MemoryState {
    text: String,
    selection: String,
    image: ImageData,
    has_image: bool,
}

impl MemoryClipboard {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(MemoryState {
                text: String::new(),
                selection: String::new(),
                image: ImageData::empty(),
                has_image: false,
            }),
            selection_supported: true,
        })
    }

    fn put_text(&self, text: &str) {
        let mut state = self.state.lock().unwrap();
        state.text = text.to_owned();
        state.has_image = false;
        state.image = ImageData::empty();
    }

    fn put_image(&self, image: ImageData) {
        let mut state = self.state.lock().unwrap();
        state.text = String::new();
        state.has_image = true;
        state.image = image;
    }

    fn put_selection(&self, text: &str) {
        self.state.lock().unwrap().selection = text.to_owned();
    }
}

impl SystemClipboardPort for MemoryClipboard {
    fn text(&self) -> Result<String> {
        Ok(self.state.lock().unwrap().text.clone())
    }

    fn set_text(&self, text: &str) -> Result<()> {
        self.put_text(text);
        Ok(())
    }

    fn image(&self) -> Result<ImageData> {
        Ok(self.state.lock().unwrap().image.clone())
    }

    fn has_image(&self) -> Result<bool> {
        Ok(self.state.lock().unwrap().has_image)
    }

    fn selection(&self) -> Result<String> {
        Ok(self.state.lock().unwrap().selection.clone())
    }

    fn set_selection(&self, text: &str) -> Result<()> {
        self.put_selection(text);
        Ok(())
    }

    fn supports_selection(&self) -> bool {
        self.selection_supported
    }
}

fn fast_config() -> WatcherConfig {
    WatcherConfig {
        poll_interval_ms: 10,
        ..WatcherConfig::default()
    }
}

async fn recv_signal(rx: &mut mpsc::Receiver<ChangeSignal>) -> Option<ChangeSignal> {
    timeout(Duration::from_millis(500), rx.recv()).await.ok()?
}

async fn expect_silence(rx: &mut mpsc::Receiver<ChangeSignal>) {
    let result = timeout(Duration::from_millis(100), rx.recv()).await;
    assert!(result.is_err(), "expected no signal, got {:?}", result);
}

#[tokio::test]
async fn unchanged_clipboard_emits_nothing() {
    let clipboard = MemoryClipboard::new();
    clipboard.put_text("stable");

    let (tx, mut rx) = mpsc::channel(16);
    let watcher = PollingWatcher::new(clipboard, tx, fast_config());
    watcher.start_watcher().await.unwrap();

    expect_silence(&mut rx).await;
}

#[tokio::test]
async fn text_change_emits_one_primary_signal() {
    let clipboard = MemoryClipboard::new();
    clipboard.put_text("before");

    let (tx, mut rx) = mpsc::channel(16);
    let watcher = PollingWatcher::new(clipboard.clone(), tx, fast_config());
    watcher.start_watcher().await.unwrap();

    clipboard.put_text("after");

    assert_eq!(recv_signal(&mut rx).await, Some(ChangeSignal::Primary));
    expect_silence(&mut rx).await;
}

#[tokio::test]
async fn image_change_emits_primary_signal() {
    let clipboard = MemoryClipboard::new();
    clipboard.put_text("text first");

    let (tx, mut rx) = mpsc::channel(16);
    let watcher = PollingWatcher::new(clipboard.clone(), tx, fast_config());
    watcher.start_watcher().await.unwrap();

    clipboard.put_image(ImageData::from_rgba8(1, 1, vec![1, 2, 3, 255]).unwrap());

    assert_eq!(recv_signal(&mut rx).await, Some(ChangeSignal::Primary));
}

#[tokio::test]
async fn replacing_one_image_with_another_is_detected() {
    let clipboard = MemoryClipboard::new();
    clipboard.put_image(ImageData::from_rgba8(1, 1, vec![10, 10, 10, 255]).unwrap());

    let (tx, mut rx) = mpsc::channel(16);
    let watcher = PollingWatcher::new(clipboard.clone(), tx, fast_config());
    watcher.start_watcher().await.unwrap();

    clipboard.put_image(ImageData::from_rgba8(1, 1, vec![20, 20, 20, 255]).unwrap());

    assert_eq!(recv_signal(&mut rx).await, Some(ChangeSignal::Primary));
}

#[tokio::test]
async fn selection_change_emits_selection_signal() {
    let clipboard = MemoryClipboard::new();
    clipboard.put_selection("old");

    let (tx, mut rx) = mpsc::channel(16);
    let watcher = PollingWatcher::new(clipboard.clone(), tx, fast_config());
    watcher.start_watcher().await.unwrap();

    clipboard.put_selection("new");

    assert_eq!(recv_signal(&mut rx).await, Some(ChangeSignal::Selection));
    expect_silence(&mut rx).await;
}

#[tokio::test]
async fn stop_watcher_halts_signal_delivery() {
    let clipboard = MemoryClipboard::new();

    let (tx, mut rx) = mpsc::channel(16);
    let watcher = PollingWatcher::new(clipboard.clone(), tx, fast_config());
    watcher.start_watcher().await.unwrap();
    watcher.stop_watcher().await.unwrap();

    clipboard.put_text("changed after stop");
    expect_silence(&mut rx).await;
}

#[tokio::test]
async fn start_is_idempotent() {
    let clipboard = MemoryClipboard::new();
    clipboard.put_text("before");

    let (tx, mut rx) = mpsc::channel(16);
    let watcher = PollingWatcher::new(clipboard.clone(), tx, fast_config());
    watcher.start_watcher().await.unwrap();
    watcher.start_watcher().await.unwrap();

    clipboard.put_text("after");

    // a second start must not double-deliver
    assert_eq!(recv_signal(&mut rx).await, Some(ChangeSignal::Primary));
    expect_silence(&mut rx).await;
}

#[tokio::test]
async fn stop_is_idempotent() {
    let clipboard = MemoryClipboard::new();

    let (tx, _rx) = mpsc::channel(16);
    let watcher = PollingWatcher::new(clipboard, tx, fast_config());
    watcher.start_watcher().await.unwrap();
    watcher.stop_watcher().await.unwrap();
    watcher.stop_watcher().await.unwrap();
}
