//! # clipbridge-platform
//!
//! Platform-specific implementations for clipbridge.
//!
//! This crate contains the infrastructure that talks to the operating
//! system: the system clipboard port implementation and the change
//! watchers that bridge OS clipboard events into signal channels.

pub mod clipboard;
pub mod watcher;

pub use clipboard::SystemClipboard;
pub use watcher::{PollingWatcher, SystemChangeWatcher};
