//! WASM bindings for the stateless crop geometry.
//!
//! Each function takes and returns plain JS objects, so a host can drive its
//! own interaction loop and only borrow the math. Parent bounds are
//! `{top, left, width, height}` of the displayed image in page pixels.

use crate::types::{from_js, js_error, to_js};
use cropframe_core::{
    clamp_to_bounds, moved_crop, new_crop, resized_crop, size, Bounds, Corner, Point, Rect,
    MIN_CROP_SIZE,
};
use wasm_bindgen::prelude::*;

/// Width and height of a crop rectangle.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const { width, height } = get_size({ top: 0, left: 0, bottom: 50, right: 100 });
/// ```
#[wasm_bindgen]
pub fn get_size(rect: JsValue) -> Result<JsValue, JsValue> {
    let rect: Rect = from_js(rect, "rect")?;
    to_js(&size(&rect))
}

/// Clamp a rectangle so it lies inside `parent`.
#[wasm_bindgen]
pub fn check_crop_borders(rect: JsValue, parent: JsValue) -> Result<JsValue, JsValue> {
    let rect: Rect = from_js(rect, "rect")?;
    let parent: Bounds = from_js(parent, "parent bounds")?;
    to_js(&clamp_to_bounds(&rect, &parent))
}

/// Crop spanned by a drag from `start` to `end` (both page points).
#[wasm_bindgen]
pub fn get_new_crop(start: JsValue, end: JsValue, parent: JsValue) -> Result<JsValue, JsValue> {
    let start: Point = from_js(start, "start point")?;
    let end: Point = from_js(end, "end point")?;
    let parent: Bounds = from_js(parent, "parent bounds")?;
    to_js(&new_crop(start, end, &parent, MIN_CROP_SIZE))
}

/// Resize `rect` by dragging `corner` (`"ne"`, `"nw"`, `"se"` or `"sw"`).
#[wasm_bindgen]
pub fn get_resized_crop(
    rect: JsValue,
    corner: &str,
    start: JsValue,
    end: JsValue,
    parent: JsValue,
) -> Result<JsValue, JsValue> {
    let corner: Corner = corner.parse().map_err(js_error)?;
    let rect: Rect = from_js(rect, "rect")?;
    let start: Point = from_js(start, "start point")?;
    let end: Point = from_js(end, "end point")?;
    let parent: Bounds = from_js(parent, "parent bounds")?;
    to_js(&resized_crop(&rect, corner, start, end, &parent, MIN_CROP_SIZE))
}

/// Translate `rect` by the drag from `start` to `end`, kept inside `parent`.
#[wasm_bindgen]
pub fn get_moved_crop(
    rect: JsValue,
    start: JsValue,
    end: JsValue,
    parent: JsValue,
) -> Result<JsValue, JsValue> {
    let rect: Rect = from_js(rect, "rect")?;
    let start: Point = from_js(start, "start point")?;
    let end: Point = from_js(end, "end point")?;
    let parent: Bounds = from_js(parent, "parent bounds")?;
    to_js(&moved_crop(&rect, start, end, &parent))
}

/// Names of the four resize handles, for rendering.
#[wasm_bindgen]
pub fn resize_handles() -> js_sys::Array {
    handle_names().into_iter().map(JsValue::from_str).collect()
}

fn handle_names() -> Vec<&'static str> {
    Corner::ALL.iter().map(|corner| corner.as_str()).collect()
}
