//! PNG encoding for clipboard images.

use anyhow::{Context, Result};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};

use clipbridge_core::clipboard::ImageData;

/// Encode a decoded clipboard image to PNG.
///
/// Compression effort is the minimum the codec offers: the call sits on a
/// UI-latency-sensitive path, and PNG stays lossless at every setting.
/// The empty image encodes to empty bytes.
pub fn encode_png(image: &ImageData) -> Result<Vec<u8>> {
    if image.is_empty() {
        return Ok(Vec::new());
    }

    let mut bytes = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut bytes, CompressionType::Fast, FilterType::NoFilter);
    encoder
        .write_image(
            image.rgba(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .context("encode clipboard image to png")?;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker_image() -> ImageData {
        let rgba = vec![
            255, 0, 0, 255, /* */ 0, 255, 0, 255, //
            0, 0, 255, 255, /* */ 255, 255, 255, 0,
        ];
        ImageData::from_rgba8(2, 2, rgba).unwrap()
    }

    #[test]
    fn test_empty_image_encodes_to_empty_bytes() {
        assert!(encode_png(&ImageData::empty()).unwrap().is_empty());
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let image = checker_image();
        assert_eq!(encode_png(&image).unwrap(), encode_png(&image).unwrap());
    }

    #[test]
    fn test_encoded_png_round_trips_pixels() {
        let image = checker_image();
        let png_bytes = encode_png(&image).unwrap();

        let decoded = image::load_from_memory(&png_bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.into_raw(), image.rgba());
    }
}
