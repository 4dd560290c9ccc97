//! System clipboard port - abstracts access to the OS clipboard service.

use crate::clipboard::ImageData;
use anyhow::Result;

/// The platform clipboard service the bridge is constructed with.
///
/// Implementations wrap the real OS clipboard; tests substitute an
/// in-memory fake. All queries are assumed to be fast, synchronous, local
/// calls. "Nothing present" is reported as an empty value, never as an
/// error.
pub trait SystemClipboardPort: Send + Sync {
    /// Current primary-buffer text; empty string when the clipboard holds
    /// no text-convertible data.
    fn text(&self) -> Result<String>;

    /// Write text to the primary buffer.
    fn set_text(&self, text: &str) -> Result<()>;

    /// Current primary-buffer image, decoded. Returns [`ImageData::empty`]
    /// when the clipboard holds no image.
    fn image(&self) -> Result<ImageData>;

    /// Whether the primary buffer currently exposes image-typed data.
    /// Probes content-type metadata only; never fetches pixel data.
    fn has_image(&self) -> Result<bool>;

    /// Current selection-buffer text. Implementations without a selection
    /// buffer return an empty string.
    fn selection(&self) -> Result<String>;

    /// Write text to the selection buffer. A no-op on platforms without
    /// one.
    fn set_selection(&self, text: &str) -> Result<()>;

    /// Whether this platform has a selection buffer. Fixed for the
    /// process lifetime.
    fn supports_selection(&self) -> bool;
}
