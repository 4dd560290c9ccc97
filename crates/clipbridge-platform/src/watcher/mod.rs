//! Clipboard change watching.
//!
//! Watchers observe the OS clipboard and emit [`ChangeSignal`]s into a
//! channel consumed by the bridge. Two strategies exist:
//!
//! - [`SystemChangeWatcher`] registers with the OS change callback for the
//!   primary buffer and polls the selection buffer (no OS callback exists
//!   for it).
//! - [`PollingWatcher`] polls both buffers through the clipboard port.
//!   Portable fallback, and fully testable against a fake port.
//!
//! [`ChangeSignal`]: clipbridge_core::clipboard::ChangeSignal

mod handler;
mod polling;
mod runtime;

pub use handler::ChangeForwarder;
pub use polling::PollingWatcher;
pub use runtime::SystemChangeWatcher;
