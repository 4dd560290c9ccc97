use anyhow::{anyhow, Context, Result};
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use clipboard_rs::common::RustImage;
use log::warn;
use std::sync::Mutex;

use super::platform::SelectionBuffer;
use clipbridge_core::clipboard::ImageData;
use clipbridge_core::ports::SystemClipboardPort;

/// The real OS clipboard behind [`SystemClipboardPort`].
///
/// The primary buffer is served by `clipboard-rs`; the selection buffer is
/// delegated to the per-platform [`SelectionBuffer`]. Reads are lenient:
/// a buffer holding no data of the requested kind yields an empty value.
pub struct SystemClipboard {
    ctx: Mutex<ClipboardContext>,
    selection: SelectionBuffer,
}

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        Ok(Self {
            ctx: Mutex::new(Self::new_context()?),
            selection: SelectionBuffer::new()?,
        })
    }

    #[cfg(target_os = "linux")]
    fn new_context() -> Result<ClipboardContext> {
        use clipboard_rs::ClipboardContextX11Options;
        map_clipboard_err(ClipboardContext::new_with_options(
            ClipboardContextX11Options { read_timeout: None },
        ))
    }

    #[cfg(not(target_os = "linux"))]
    fn new_context() -> Result<ClipboardContext> {
        map_clipboard_err(ClipboardContext::new())
    }
}

impl SystemClipboardPort for SystemClipboard {
    fn text(&self) -> Result<String> {
        let ctx = self.ctx.lock().unwrap();
        if !ctx.has(ContentFormat::Text) {
            return Ok(String::new());
        }
        Ok(ctx.get_text().unwrap_or_default())
    }

    fn set_text(&self, text: &str) -> Result<()> {
        let ctx = self.ctx.lock().unwrap();
        map_clipboard_err(ctx.set_text(text.to_owned()))
    }

    fn image(&self) -> Result<ImageData> {
        let png_bytes = {
            let ctx = self.ctx.lock().unwrap();
            if !ctx.has(ContentFormat::Image) {
                return Ok(ImageData::empty());
            }
            let img = match ctx.get_image() {
                Ok(img) => img,
                Err(err) => {
                    warn!("failed to read clipboard image: {}", err);
                    return Ok(ImageData::empty());
                }
            };
            let png = img.to_png().map_err(|e| anyhow!(e))?;
            png.get_bytes().to_vec()
        };

        decode_rgba(&png_bytes)
    }

    fn has_image(&self) -> Result<bool> {
        let ctx = self.ctx.lock().unwrap();
        Ok(ctx.has(ContentFormat::Image))
    }

    fn selection(&self) -> Result<String> {
        self.selection.text()
    }

    fn set_selection(&self, text: &str) -> Result<()> {
        self.selection.set_text(text)
    }

    fn supports_selection(&self) -> bool {
        self.selection.supported()
    }
}

fn decode_rgba(png_bytes: &[u8]) -> Result<ImageData> {
    let decoded = image::load_from_memory(png_bytes).context("decode clipboard image bytes")?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    ImageData::from_rgba8(width, height, rgba.into_raw())
}
