//! WASM binding for one-shot crop extraction.

use crate::types::{from_js, js_error};
use cropframe_core::{extract_jpeg, Rect, Size};
use wasm_bindgen::prelude::*;

/// Cut a displayed-space crop out of encoded image bytes.
///
/// # Arguments
///
/// * `bytes` - Source image file (JPEG or PNG)
/// * `crop` - `{top, left, bottom, right}` in display pixels
/// * `display_width` / `display_height` - Size the image was rendered at
/// * `quality` - JPEG quality (1-100)
///
/// # Returns
///
/// JPEG-encoded bytes of the region, at the source image's resolution.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const jpeg = extract_crop(bytes, crop, img.width, img.height, 100);
/// const blob = new Blob([jpeg], { type: 'image/jpeg' });
/// ```
#[wasm_bindgen]
pub fn extract_crop(
    bytes: &[u8],
    crop: JsValue,
    display_width: f64,
    display_height: f64,
    quality: u8,
) -> Result<Vec<u8>, JsValue> {
    let crop: Rect = from_js(crop, "crop")?;
    extract_jpeg(bytes, &crop, Size::new(display_width, display_height), quality).map_err(js_error)
}
