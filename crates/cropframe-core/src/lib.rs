//! Cropframe Core - crop geometry and editor state
//!
//! This crate provides the core of the Cropframe crop editor: the pure
//! geometry that turns pointer drags into a valid crop rectangle, the state
//! machine that decides which geometry runs, and the pipeline that extracts
//! the confirmed crop from the source image.
//!
//! # Module Structure
//!
//! - `geometry` - rectangles, points, parent bounds and clamping helpers
//! - `crop` - the create, resize and move engines
//! - `editor` - the interaction state machine and single-step image history
//! - `decode` / `encode` / `extract` - turning a confirmed crop into JPEG bytes

pub mod crop;
pub mod decode;
pub mod editor;
pub mod encode;
pub mod extract;
pub mod geometry;

pub use crop::{moved_crop, new_crop, resized_crop, Corner, MIN_CROP_SIZE};
pub use editor::{classify_target, CropEditor, CropStatus, PointerTarget};
pub use extract::{extract_jpeg, extract_region, ExtractError};
pub use geometry::{clamp_to_bounds, clamp_value, size, Bounds, Point, Rect, Size};

/// Editor settings supplied by the host.
///
/// Every field has a default, so a partial (or empty) object is valid input.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Minimum crop width in pixels
    pub min_width: f64,
    /// Minimum crop height in pixels
    pub min_height: f64,
    /// How far from a corner (in pixels, per axis) a pointer-down still grabs its handle
    pub handle_reach: f64,
    /// JPEG quality for extracted crops (1-100)
    pub jpeg_quality: u8,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_width: MIN_CROP_SIZE.width,
            min_height: MIN_CROP_SIZE.height,
            handle_reach: 8.0,
            jpeg_quality: 100,
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum crop size as a [`Size`].
    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_config_default() {
        let config = EditorConfig::new();
        assert!(config.is_default());
        assert_eq!(config.min_size(), Size::new(10.0, 10.0));
        assert_eq!(config.jpeg_quality, 100);
    }

    #[test]
    fn test_editor_config_not_default() {
        let mut config = EditorConfig::new();
        config.handle_reach = 12.0;
        assert!(!config.is_default());
    }
}
