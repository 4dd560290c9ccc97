//! Port interfaces between the bridge and its platform implementations.
//!
//! Ports define the contract between the UI-facing bridge and the
//! operating-system layer, so the bridge can be exercised against fake
//! clipboards in tests instead of real OS state.

mod errors;
mod system_clipboard;
mod watcher_control;

pub use errors::ImageWriteError;
pub use system_clipboard::SystemClipboardPort;
pub use watcher_control::{WatcherControlPort, WatcherError};
