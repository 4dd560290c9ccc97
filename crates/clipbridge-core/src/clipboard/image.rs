use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// A decoded clipboard image: RGBA8 pixels plus dimensions.
///
/// This is the value the platform layer hands upward after querying the
/// system clipboard. The empty image (zero dimensions, no pixels) is the
/// "clipboard holds no image" value, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageData {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl ImageData {
    /// Build an image from raw RGBA8 pixel data.
    ///
    /// The buffer length must be exactly `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        ensure!(
            rgba.len() == expected,
            "rgba buffer length {} does not match {}x{} image (expected {})",
            rgba.len(),
            width,
            height,
            expected
        );
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// The "no image on the clipboard" value.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            rgba: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixel bytes, row-major.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}

impl Default for ImageData {
    fn default() -> Self {
        Self::empty()
    }
}
