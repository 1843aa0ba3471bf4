//! Extracting a confirmed crop from the source image.
//!
//! Crop rectangles live in display space: pixels of the image as rendered on
//! the page. The source image is usually larger (or smaller) than its
//! rendering, so each axis is scaled by `natural / displayed` before pixels
//! are copied.
//!
//! # Example
//!
//! ```ignore
//! // A 4000x3000 photo shown at 800x600; keep the displayed top-left quarter.
//! let crop = Rect::new(0.0, 0.0, 300.0, 400.0);
//! let jpeg = extract_jpeg(&bytes, &crop, Size::new(800.0, 600.0), 100)?;
//! ```

use thiserror::Error;

use crate::decode::{decode_image, DecodeError, DecodedImage};
use crate::encode::{encode_image, EncodeError};
use crate::geometry::{Rect, Size};

/// Errors that can occur while extracting a crop.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The displayed size used for scaling is zero, negative or not a number.
    #[error("Invalid display size: {width}x{height}")]
    InvalidDisplaySize { width: f64, height: f64 },

    /// The crop has no positive area.
    #[error("Crop has no area: {0:?}")]
    DegenerateCrop(Rect),

    /// The crop lies outside the image once scaled to source pixels.
    #[error("Crop region is empty after scaling to {width}x{height} source pixels")]
    EmptyRegion { width: u32, height: u32 },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Copy the pixels under `crop` out of `image`.
///
/// # Arguments
///
/// * `image` - Source image at its natural resolution
/// * `crop` - Crop rectangle in display pixels
/// * `display` - Size the image was rendered at when the crop was drawn
///
/// # Behavior
///
/// - Edges are scaled per axis and rounded to whole source pixels
/// - The scaled region is clamped to the image
/// - A crop covering the whole display returns a copy of the image
pub fn extract_region(
    image: &DecodedImage,
    crop: &Rect,
    display: Size,
) -> Result<DecodedImage, ExtractError> {
    let positive = |value: f64| value > 0.0;
    if !(positive(display.width) && positive(display.height)) {
        return Err(ExtractError::InvalidDisplaySize {
            width: display.width,
            height: display.height,
        });
    }
    if crop.is_degenerate() {
        return Err(ExtractError::DegenerateCrop(*crop));
    }

    // Fast path: full crop returns a clone
    if crop.left <= 0.0
        && crop.top <= 0.0
        && crop.right >= display.width
        && crop.bottom >= display.height
    {
        return Ok(image.clone());
    }

    let natural = image.natural_size();
    let scale_x = natural.width / display.width;
    let scale_y = natural.height / display.height;

    let to_px = |value: f64, scale: f64, limit: u32| -> u32 {
        // Float-to-int casts saturate, so negatives land on 0
        ((value * scale).round() as u32).min(limit)
    };
    let left = to_px(crop.left, scale_x, image.width);
    let top = to_px(crop.top, scale_y, image.height);
    let right = to_px(crop.right, scale_x, image.width);
    let bottom = to_px(crop.bottom, scale_y, image.height);

    let out_width = right.saturating_sub(left);
    let out_height = bottom.saturating_sub(top);
    if out_width == 0 || out_height == 0 {
        return Err(ExtractError::EmptyRegion {
            width: out_width,
            height: out_height,
        });
    }

    log::debug!(
        "extracting {}x{} at ({}, {}) from {}x{} source",
        out_width,
        out_height,
        left,
        top,
        image.width,
        image.height
    );

    let mut pixels = Vec::with_capacity((out_width as usize) * (out_height as usize) * 3);
    for y in top..bottom {
        pixels.extend_from_slice(image.row_span(left, y, out_width));
    }

    Ok(DecodedImage::new(out_width, out_height, pixels))
}

/// Decode `bytes`, extract `crop` and re-encode the region as JPEG.
pub fn extract_jpeg(
    bytes: &[u8],
    crop: &Rect,
    display: Size,
    quality: u8,
) -> Result<Vec<u8>, ExtractError> {
    let image = decode_image(bytes)?;
    let region = extract_region(&image, crop, display)?;
    Ok(encode_image(&region, quality)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_jpeg;

    /// Create a test image where each pixel has a unique value based on position.
    fn test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_full_crop_is_identity() {
        let img = test_image(50, 40);
        let crop = Rect::new(0.0, 0.0, 40.0, 50.0);
        let result = extract_region(&img, &crop, Size::new(50.0, 40.0)).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_unscaled_region() {
        let img = test_image(10, 10);
        let crop = Rect::new(2.0, 3.0, 6.0, 7.0);
        let result = extract_region(&img, &crop, Size::new(10.0, 10.0)).unwrap();

        assert_eq!((result.width, result.height), (4, 4));
        // First pixel comes from (3, 2): 2 * 10 + 3 = 23
        assert_eq!(result.pixels[0], 23);
    }

    #[test]
    fn test_region_scaled_to_natural_size() {
        // 100x80 source displayed at half size
        let img = test_image(100, 80);
        let crop = Rect::new(10.0, 5.0, 30.0, 25.0);
        let result = extract_region(&img, &crop, Size::new(50.0, 40.0)).unwrap();

        assert_eq!((result.width, result.height), (40, 40));
        // First pixel comes from (10, 20): (20 * 100 + 10) % 256 = 218
        assert_eq!(result.pixels[0], 218);
    }

    #[test]
    fn test_region_scaled_down() {
        // 20x20 source displayed at 200x200
        let img = test_image(20, 20);
        let crop = Rect::new(100.0, 100.0, 200.0, 200.0);
        let result = extract_region(&img, &crop, Size::new(200.0, 200.0)).unwrap();
        assert_eq!((result.width, result.height), (10, 10));
    }

    #[test]
    fn test_region_clamped_to_image() {
        let img = test_image(10, 10);
        let crop = Rect::new(-5.0, 6.0, 30.0, 30.0);
        let result = extract_region(&img, &crop, Size::new(10.0, 10.0)).unwrap();
        assert_eq!((result.width, result.height), (4, 10));
    }

    #[test]
    fn test_degenerate_crop_rejected() {
        let img = test_image(10, 10);
        let crop = Rect::new(60.0, 60.0, 50.0, 50.0);
        let result = extract_region(&img, &crop, Size::new(10.0, 10.0));
        assert!(matches!(result, Err(ExtractError::DegenerateCrop(_))));
    }

    #[test]
    fn test_invalid_display_size_rejected() {
        let img = test_image(10, 10);
        let crop = Rect::new(0.0, 0.0, 5.0, 5.0);
        for display in [Size::new(0.0, 10.0), Size::new(10.0, -1.0), Size::new(f64::NAN, 10.0)] {
            let result = extract_region(&img, &crop, display);
            assert!(matches!(result, Err(ExtractError::InvalidDisplaySize { .. })));
        }
    }

    #[test]
    fn test_region_outside_image_is_empty() {
        let img = test_image(10, 10);
        let crop = Rect::new(0.0, 20.0, 5.0, 30.0);
        let result = extract_region(&img, &crop, Size::new(10.0, 10.0));
        assert!(matches!(
            result,
            Err(ExtractError::EmptyRegion { width: 0, height: 5 })
        ));
    }

    #[test]
    fn test_extract_jpeg_end_to_end() {
        let img = test_image(64, 48);
        let source = encode_jpeg(&img.pixels, img.width, img.height, 100).unwrap();

        let crop = Rect::new(0.0, 0.0, 12.0, 16.0);
        let jpeg = extract_jpeg(&source, &crop, Size::new(32.0, 24.0), 100).unwrap();

        let decoded = decode_image(&jpeg).unwrap();
        assert_eq!((decoded.width, decoded.height), (32, 24));
    }

    #[test]
    fn test_extract_jpeg_invalid_source() {
        let crop = Rect::new(0.0, 0.0, 5.0, 5.0);
        let result = extract_jpeg(&[1, 2, 3], &crop, Size::new(10.0, 10.0), 100);
        assert!(matches!(result, Err(ExtractError::Decode(_))));
    }

    #[test]
    fn test_extract_error_display() {
        let err = ExtractError::InvalidDisplaySize {
            width: 0.0,
            height: 10.0,
        };
        assert_eq!(err.to_string(), "Invalid display size: 0x10");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
