//! # clipbridge-core
//!
//! Domain models and port interfaces for clipbridge.
//!
//! This crate contains the platform-agnostic clipboard model without any
//! operating-system dependencies.

pub mod clipboard;
pub mod config;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{ChangeSignal, ClipboardNotification, ImageData};
pub use config::WatcherConfig;
pub use ports::{ImageWriteError, SystemClipboardPort, WatcherControlPort, WatcherError};
