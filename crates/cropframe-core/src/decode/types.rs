//! Core types for image decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Size;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not a recognised image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image data is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    /// Flip horizontal + rotate 270 CW.
    Transpose = 5,
    Rotate90CW = 6,
    /// Flip horizontal + rotate 90 CW.
    Transverse = 7,
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A decoded image with RGB pixel data, already in display orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    /// Width in pixels (the browser's `naturalWidth`).
    pub width: u32,
    /// Height in pixels (the browser's `naturalHeight`).
    pub height: u32,
    /// RGB pixel data in row-major order, `width * height * 3` bytes.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Pixel dimensions as a floating point size, for display scaling.
    pub fn natural_size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }

    /// The RGB bytes of row `y`, columns `x..x + len`.
    pub fn row_span(&self, x: u32, y: u32, len: u32) -> &[u8] {
        let start = ((y as usize) * (self.width as usize) + x as usize) * 3;
        &self.pixels[start..start + (len as usize) * 3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(8), Orientation::Rotate270CW);
        assert_eq!(Orientation::from(0), Orientation::Normal);
        assert_eq!(Orientation::from(99), Orientation::Normal);
    }

    #[test]
    fn test_natural_size() {
        let img = DecodedImage::new(4, 2, vec![0u8; 4 * 2 * 3]);
        assert_eq!(img.natural_size(), Size::new(4.0, 2.0));
    }

    #[test]
    fn test_row_span() {
        let pixels: Vec<u8> = (0..(3 * 2 * 3)).collect();
        let img = DecodedImage::new(3, 2, pixels);
        assert_eq!(img.row_span(1, 1, 2), &[12, 13, 14, 15, 16, 17]);
        assert_eq!(img.row_span(0, 0, 1), &[0, 1, 2]);
    }

    #[test]
    fn test_decode_error_display() {
        assert_eq!(
            DecodeError::InvalidFormat.to_string(),
            "Invalid or unsupported image format"
        );
        assert_eq!(
            DecodeError::CorruptedFile("eof".to_string()).to_string(),
            "Corrupted or incomplete image file: eof"
        );
    }
}
