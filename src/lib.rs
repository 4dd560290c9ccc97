//! # clipbridge
//!
//! Exposes the host system clipboard (and, on X11/Wayland, the
//! middle-click selection buffer) to a declarative UI layer: live text
//! accessors, PNG-encoded image reads behind a one-slot cache, and typed
//! change notifications on a broadcast channel.
//!
//! ```no_run
//! use clipbridge::{connect_system, ClipboardNotification, WatcherConfig};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let bridge = connect_system(WatcherConfig::default()).await?;
//! let mut notifications = bridge.subscribe();
//!
//! bridge.set_text("hello")?;
//! while let Ok(notification) = notifications.recv().await {
//!     if notification == ClipboardNotification::TextChanged {
//!         println!("clipboard now holds: {}", bridge.text()?);
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod bridge;
pub mod connect;
pub mod encode;

pub use bridge::ClipboardBridge;
pub use connect::connect_system;

// Re-export the domain types consumers interact with
pub use clipbridge_core::clipboard::{ChangeSignal, ClipboardNotification, ImageData};
pub use clipbridge_core::config::WatcherConfig;
pub use clipbridge_core::ports::{ImageWriteError, SystemClipboardPort};
