use clipboard_rs::ClipboardHandler;

use clipbridge_core::clipboard::{ChangeSignal, ChangeSignalSender};

/// Forwards OS primary-clipboard change callbacks into the signal channel.
///
/// The callback runs on the watcher thread, outside any async context, so
/// the signal is pushed with `try_send`. A full channel drops the signal
/// with a warning; the bridge will re-probe on the next one.
pub struct ChangeForwarder {
    tx: ChangeSignalSender,
}

impl ChangeForwarder {
    pub fn new(tx: ChangeSignalSender) -> Self {
        Self { tx }
    }
}

impl ClipboardHandler for ChangeForwarder {
    fn on_clipboard_change(&mut self) {
        if let Err(err) = self.tx.try_send(ChangeSignal::Primary) {
            log::warn!("failed to forward clipboard change signal: {}", err);
        }
    }
}
