//! Conversions between JavaScript values and core types.
//!
//! Geometry crosses the boundary as plain objects (`{top, left, bottom,
//! right}`, `{x, y}`, ...) through serde_wasm_bindgen. These helpers only run
//! on wasm32 because they construct `JsValue`s.

use cropframe_core::{EditorConfig, Rect};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// The CSS box of the crop frame, as the presentation layer positions it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JsCropFrame {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Rect> for JsCropFrame {
    fn from(rect: Rect) -> Self {
        let size = rect.size();
        Self {
            top: rect.top,
            left: rect.left,
            width: size.width,
            height: size.height,
        }
    }
}

/// Deserialize a JS object, naming the argument in the error.
pub(crate) fn from_js<T: DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid {}: {}", what, e)))
}

/// Serialize a value into a plain JS object.
pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Read an optional config object; `undefined` and `null` mean defaults.
pub(crate) fn config_from_js(value: JsValue) -> Result<EditorConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(EditorConfig::default());
    }
    from_js(value, "editor config")
}

/// Turn any displayable error into a JS error string.
pub(crate) fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
