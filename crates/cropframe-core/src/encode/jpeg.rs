//! JPEG encoding via the `image` crate.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::decode::DecodedImage;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The encoder itself failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGB pixel data to JPEG bytes.
///
/// `quality` is clamped to 1-100.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode a decoded image to JPEG bytes.
pub fn encode_image(image: &DecodedImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    encode_jpeg(&image.pixels, image.width, image.height, quality)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_jpeg_markers(bytes: &[u8]) {
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8], "missing SOI marker");
        assert_eq!(&bytes[bytes.len() - 2..], &[0xFF, 0xD9], "missing EOI marker");
    }

    #[test]
    fn test_encode_jpeg_basic() {
        let pixels = vec![128u8; 40 * 30 * 3];
        let jpeg = encode_jpeg(&pixels, 40, 30, 100).unwrap();
        assert_jpeg_markers(&jpeg);
    }

    #[test]
    fn test_encode_quality_is_clamped() {
        let pixels = vec![200u8; 8 * 8 * 3];
        assert!(encode_jpeg(&pixels, 8, 8, 0).is_ok());
        assert!(encode_jpeg(&pixels, 8, 8, 255).is_ok());
    }

    #[test]
    fn test_encode_rejects_mismatched_buffer() {
        let pixels = vec![128u8; 10 * 9 * 3];
        let result = encode_jpeg(&pixels, 10, 10, 90);
        assert!(matches!(
            result,
            Err(EncodeError::InvalidPixelData {
                expected: 300,
                actual: 270
            })
        ));
    }

    #[test]
    fn test_encode_rejects_zero_dimensions() {
        assert!(matches!(
            encode_jpeg(&[], 0, 10, 90),
            Err(EncodeError::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(matches!(
            encode_jpeg(&[], 10, 0, 90),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_encode_image_round_trips_dimensions() {
        let img = DecodedImage::new(12, 7, vec![90u8; 12 * 7 * 3]);
        let jpeg = encode_image(&img, 100).unwrap();
        assert_jpeg_markers(&jpeg);

        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (12, 7));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any correctly sized buffer encodes to a JPEG.
        #[test]
        fn prop_valid_input_encodes(
            (width, height) in (1u32..=24, 1u32..=24),
            quality in 1u8..=100,
            fill in any::<u8>(),
        ) {
            let pixels = vec![fill; (width * height * 3) as usize];
            let jpeg = encode_jpeg(&pixels, width, height, quality);
            prop_assert!(jpeg.is_ok());
            let jpeg = jpeg.unwrap();
            prop_assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        }
    }
}
