//! Clipboard domain models.
mod change;
mod image;
mod notification;

pub use change::{ChangeSignal, ChangeSignalReceiver, ChangeSignalSender};
pub use image::ImageData;
pub use notification::ClipboardNotification;
