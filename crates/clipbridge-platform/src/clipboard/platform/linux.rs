use anyhow::Result;
use arboard::{GetExtLinux, LinuxClipboardKind, SetExtLinux};
use std::sync::Mutex;

/// X11/Wayland primary-selection buffer, backed by arboard.
///
/// This is the buffer populated by selecting text and pasted with
/// middle-click. It exists independently of the copy/paste clipboard.
pub struct SelectionBuffer {
    inner: Mutex<arboard::Clipboard>,
}

impl SelectionBuffer {
    pub fn new() -> Result<Self> {
        let clipboard = arboard::Clipboard::new()?;
        Ok(Self {
            inner: Mutex::new(clipboard),
        })
    }

    pub fn supported(&self) -> bool {
        true
    }

    pub fn text(&self) -> Result<String> {
        let mut inner = self.inner.lock().unwrap();
        match inner.get().clipboard(LinuxClipboardKind::Primary).text() {
            Ok(text) => Ok(text),
            // Selection holds no text-convertible data
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn set_text(&self, text: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .set()
            .clipboard(LinuxClipboardKind::Primary)
            .text(text.to_owned())?;
        Ok(())
    }
}
