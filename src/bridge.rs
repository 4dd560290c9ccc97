//! The UI-facing clipboard bridge.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use log::warn;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use clipbridge_core::clipboard::{
    ChangeSignal, ChangeSignalReceiver, ClipboardNotification, ImageData,
};
use clipbridge_core::ports::{ImageWriteError, SystemClipboardPort, WatcherControlPort};

use crate::encode;

/// How many notifications a slow subscriber may lag behind before the
/// oldest are dropped. Notifications are level-triggers, so a dropped one
/// loses nothing a re-read will not recover.
const NOTIFICATION_CAPACITY: usize = 32;

/// State shared between the bridge and its signal pump task.
struct Shared {
    port: Arc<dyn SystemClipboardPort>,
    cached_image: Mutex<Option<ImageData>>,
    notifications: broadcast::Sender<ClipboardNotification>,
}

impl Shared {
    fn notify(&self, notification: ClipboardNotification) {
        // Err only means nobody is subscribed right now
        let _ = self.notifications.send(notification);
    }

    fn on_primary_change(&self) {
        self.notify(ClipboardNotification::ContentChanged);

        // the cache is dropped on every primary change, never refreshed
        // eagerly; the next image read re-fetches
        *self.cached_image.lock().expect("image cache lock") = None;

        let has_image = self.port.has_image().unwrap_or_else(|err| {
            warn!("has_image probe failed, classifying change as text: {}", err);
            false
        });
        self.notify(if has_image {
            ClipboardNotification::ImageChanged
        } else {
            ClipboardNotification::TextChanged
        });
        self.notify(ClipboardNotification::HasImageChanged);
    }

    fn on_selection_change(&self) {
        self.notify(ClipboardNotification::SelectionChanged);
    }
}

/// Single point of access to the platform clipboard for a UI layer.
///
/// Reads and writes pass straight through to the injected
/// [`SystemClipboardPort`]; the only local state is a one-slot cache of
/// the last decoded image. Change signals from the platform watcher are
/// re-broadcast as typed [`ClipboardNotification`]s. That includes the
/// bridge's own writes, which emit nothing directly and are observed the
/// same way any external copy is.
pub struct ClipboardBridge {
    shared: Arc<Shared>,
    supports_selection: bool,
    pump: JoinHandle<()>,
    _watcher: Option<Box<dyn WatcherControlPort>>,
}

impl ClipboardBridge {
    /// Wire a bridge to a clipboard port and a change-signal source.
    ///
    /// Must be called inside a tokio runtime: the signal pump task is
    /// spawned immediately and aborted again when the bridge is dropped.
    pub fn new(port: Arc<dyn SystemClipboardPort>, signals: ChangeSignalReceiver) -> Self {
        Self::with_watcher(port, signals, None)
    }

    pub(crate) fn with_watcher(
        port: Arc<dyn SystemClipboardPort>,
        mut signals: ChangeSignalReceiver,
        watcher: Option<Box<dyn WatcherControlPort>>,
    ) -> Self {
        let (notifications, _) = broadcast::channel(NOTIFICATION_CAPACITY);
        let supports_selection = port.supports_selection();
        let shared = Arc::new(Shared {
            port,
            cached_image: Mutex::new(None),
            notifications,
        });

        let pump_shared = shared.clone();
        let pump = tokio::spawn(async move {
            while let Some(signal) = signals.recv().await {
                match signal {
                    ChangeSignal::Primary => pump_shared.on_primary_change(),
                    ChangeSignal::Selection => pump_shared.on_selection_change(),
                }
            }
        });

        Self {
            shared,
            supports_selection,
            pump,
            _watcher: watcher,
        }
    }

    /// Current primary-buffer text, queried live from the platform.
    pub fn text(&self) -> Result<String> {
        self.shared.port.text()
    }

    /// Write text to the primary buffer.
    ///
    /// No notification is emitted by this call itself; the platform's own
    /// change signal drives notification, so a caller that writes and
    /// immediately reads another accessor may not yet observe the update.
    pub fn set_text(&self, text: &str) -> Result<()> {
        self.shared.port.set_text(text)
    }

    /// PNG-encoded primary-buffer image.
    ///
    /// The decoded image is cached until the next primary-buffer change;
    /// encoding runs on every call and is deterministic, so back-to-back
    /// calls return identical bytes. An imageless clipboard yields empty
    /// bytes.
    pub fn image(&self) -> Result<Vec<u8>> {
        let image = {
            let mut cached = self.shared.cached_image.lock().expect("image cache lock");
            match &*cached {
                Some(image) => image.clone(),
                None => {
                    let fetched = self.shared.port.image()?;
                    *cached = Some(fetched.clone());
                    fetched
                }
            }
        };

        // encoding is pure; it runs on the clone, outside the lock
        encode::encode_png(&image)
    }

    /// Writing images is not implemented; always returns
    /// [`ImageWriteError::Unsupported`] and leaves clipboard state
    /// untouched.
    pub fn set_image(&self, _png_bytes: &[u8]) -> Result<(), ImageWriteError> {
        Err(ImageWriteError::Unsupported)
    }

    /// Whether the primary buffer currently holds image-typed data.
    pub fn has_image(&self) -> Result<bool> {
        self.shared.port.has_image()
    }

    /// Current selection-buffer text.
    pub fn selection(&self) -> Result<String> {
        self.shared.port.selection()
    }

    /// Write text to the selection buffer; a no-op on platforms without
    /// one.
    pub fn set_selection(&self, text: &str) -> Result<()> {
        if !self.supports_selection {
            return Ok(());
        }
        self.shared.port.set_selection(text)
    }

    /// Whether this platform has a selection buffer. Captured once at
    /// construction and constant afterwards.
    pub fn supports_selection(&self) -> bool {
        self.supports_selection
    }

    /// Subscribe to change notifications.
    ///
    /// Subscribers created after a notification was broadcast do not see
    /// it; subscribe before triggering changes.
    pub fn subscribe(&self) -> broadcast::Receiver<ClipboardNotification> {
        self.shared.notifications.subscribe()
    }
}

impl Drop for ClipboardBridge {
    fn drop(&mut self) {
        self.pump.abort();
    }
}
