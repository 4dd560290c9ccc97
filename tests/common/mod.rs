//! In-memory clipboard double for bridge tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;

use clipbridge_core::clipboard::ImageData;
use clipbridge_core::ports::SystemClipboardPort;

/// Fake platform clipboard with counters for platform-read assertions.
///
/// Writes apply synchronously; change signals are the test's job to send,
/// mirroring how the real watcher is a separate component.
pub struct FakeClipboard {
    state: Mutex<FakeState>,
    image_reads: AtomicUsize,
    selection_supported: bool,
}

#[derive(Default)]
struct FakeState {
    text: String,
    selection: String,
    image: ImageData,
    has_image: bool,
}

impl FakeClipboard {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(FakeState::default()),
            image_reads: AtomicUsize::new(0),
            selection_supported: true,
        })
    }

    pub fn without_selection() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(FakeState::default()),
            image_reads: AtomicUsize::new(0),
            selection_supported: false,
        })
    }

    /// Place image content on the fake clipboard, as an external copy
    /// would.
    pub fn put_image(&self, image: ImageData) {
        let mut state = self.state.lock().unwrap();
        state.text = String::new();
        state.has_image = true;
        state.image = image;
    }

    /// Place text content on the fake clipboard, as an external copy
    /// would.
    pub fn put_text(&self, text: &str) {
        let mut state = self.state.lock().unwrap();
        state.text = text.to_owned();
        state.has_image = false;
        state.image = ImageData::empty();
    }

    /// How many times the bridge fetched pixel data from the platform.
    pub fn image_reads(&self) -> usize {
        self.image_reads.load(Ordering::SeqCst)
    }

    pub fn selection_text(&self) -> String {
        self.state.lock().unwrap().selection.clone()
    }
}

impl SystemClipboardPort for FakeClipboard {
    fn text(&self) -> Result<String> {
        Ok(self.state.lock().unwrap().text.clone())
    }

    fn set_text(&self, text: &str) -> Result<()> {
        self.put_text(text);
        Ok(())
    }

    fn image(&self) -> Result<ImageData> {
        self.image_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.state.lock().unwrap().image.clone())
    }

    fn has_image(&self) -> Result<bool> {
        Ok(self.state.lock().unwrap().has_image)
    }

    fn selection(&self) -> Result<String> {
        Ok(self.state.lock().unwrap().selection.clone())
    }

    fn set_selection(&self, text: &str) -> Result<()> {
        self.state.lock().unwrap().selection = text.to_owned();
        Ok(())
    }

    fn supports_selection(&self) -> bool {
        self.selection_supported
    }
}
