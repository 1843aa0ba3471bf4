//! A stateful crop session for one image element.
//!
//! `CropSession` owns the editor state machine and the loaded image bytes.
//! The host forwards button clicks and pointer events; the session decides
//! what they mean in the current state and hands back the crop to draw.

use crate::types::{config_from_js, js_error, to_js, JsCropFrame};
use cropframe_core::decode::{decode_image, DecodeError};
use cropframe_core::{
    classify_target, extract_jpeg, Bounds, CropEditor, EditorConfig, ExtractError, Point, Rect,
    Size,
};
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No image loaded")]
    NoImage,

    #[error("No crop is awaiting confirmation")]
    NoPendingCrop,

    #[error("Invalid editor config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Interactive crop editor bound to a single displayed image.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const session = new CropSession({ jpeg_quality: 95 });
/// session.load_image(bytes);
/// session.start_crop(img.width, img.height);
///
/// img.onpointerdown = (e) => {
///   const r = img.getBoundingClientRect();
///   session.pointer_down(e.pageX, e.pageY, r.top + scrollY, r.left + scrollX, r.width, r.height);
/// };
/// onpointermove = (e) => session.pointer_move(e.pageX, e.pageY) && redraw(session.frame());
/// onpointerup = () => session.pointer_up();
///
/// const jpeg = session.confirm(img.width, img.height);
/// ```
#[wasm_bindgen]
pub struct CropSession {
    editor: CropEditor<Vec<u8>>,
    config: EditorConfig,
}

#[wasm_bindgen]
impl CropSession {
    /// Create a session. `config` may be omitted or partial.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<CropSession, JsValue> {
        let config = config_from_js(config)?;
        Self::with_config(config).map_err(js_error)
    }

    /// Load a new image file, replacing the current one and any undo step.
    ///
    /// The bytes must decode; on failure the session is left unchanged.
    pub fn load_image(&mut self, bytes: Vec<u8>) -> Result<(), JsValue> {
        self.load(bytes).map_err(js_error)
    }

    /// Enter crop mode with the crop covering the displayed image.
    pub fn start_crop(&mut self, display_width: f64, display_height: f64) -> bool {
        self.editor
            .start_crop(Size::new(display_width, display_height))
    }

    /// Pointer pressed at page point (`x`, `y`).
    ///
    /// The parent arguments describe the displayed image right now. What the
    /// press grabs (a corner handle, the frame, or bare image) is decided from
    /// the current crop.
    pub fn pointer_down(
        &mut self,
        x: f64,
        y: f64,
        parent_top: f64,
        parent_left: f64,
        parent_width: f64,
        parent_height: f64,
    ) -> bool {
        let at = Point::new(x, y);
        let parent = Bounds::new(parent_top, parent_left, parent_width, parent_height);
        self.press(at, parent)
    }

    /// Pointer moved. Returns `true` when the crop changed and needs redrawing.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.editor.pointer_move(Point::new(x, y)).is_some()
    }

    pub fn pointer_up(&mut self) -> bool {
        self.editor.pointer_up()
    }

    /// Extract the pending crop and make it the current image.
    ///
    /// Returns the JPEG bytes of the cropped image. The previous image is kept
    /// for one `undo`.
    pub fn confirm(&mut self, display_width: f64, display_height: f64) -> Result<Vec<u8>, JsValue> {
        self.confirm_crop(Size::new(display_width, display_height))
            .map_err(js_error)
    }

    pub fn cancel(&mut self) -> bool {
        self.editor.cancel()
    }

    /// Restore the image from before the last confirmed crop.
    pub fn undo(&mut self) -> bool {
        self.editor.undo()
    }

    /// The displayed image changed size; any crop in progress is abandoned.
    pub fn window_resized(&mut self) -> bool {
        self.editor.window_resized()
    }

    /// Current state: `"NONE"`, `"READY"`, `"CREATING"`, `"CROPPING"`,
    /// `"MOVING"` or `"RESIZING"`.
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        self.editor.status().as_str().to_string()
    }

    /// The crop rectangle `{top, left, bottom, right}`.
    #[wasm_bindgen(getter)]
    pub fn crop(&self) -> Result<JsValue, JsValue> {
        to_js(&self.crop_rect())
    }

    /// The frame box `{top, left, width, height}`, or `null` outside crop mode.
    pub fn frame(&self) -> Result<JsValue, JsValue> {
        match self.frame_box() {
            Some(frame) => to_js(&frame),
            None => Ok(JsValue::NULL),
        }
    }

    /// Bytes of the current image.
    #[wasm_bindgen(getter)]
    pub fn image(&self) -> Option<Vec<u8>> {
        self.editor.image().cloned()
    }

    #[wasm_bindgen(getter)]
    pub fn can_undo(&self) -> bool {
        self.editor.can_undo()
    }

    #[wasm_bindgen(getter)]
    pub fn is_cropping(&self) -> bool {
        self.editor.is_cropping()
    }

    #[wasm_bindgen(getter)]
    pub fn can_start_crop(&self) -> bool {
        self.editor.can_start_crop()
    }
}

impl CropSession {
    /// Create a session from an already-parsed config.
    pub fn with_config(config: EditorConfig) -> Result<Self, SessionError> {
        let positive = |value: f64| value > 0.0;
        if !(positive(config.min_width) && positive(config.min_height)) {
            return Err(SessionError::InvalidConfig(format!(
                "minimum crop size must be positive, got {}x{}",
                config.min_width, config.min_height
            )));
        }
        if config.handle_reach.is_nan() || config.handle_reach < 0.0 {
            return Err(SessionError::InvalidConfig(format!(
                "handle reach must not be negative, got {}",
                config.handle_reach
            )));
        }
        Ok(Self {
            editor: CropEditor::with_min_size(config.min_size()),
            config,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn editor(&self) -> &CropEditor<Vec<u8>> {
        &self.editor
    }

    pub(crate) fn load(&mut self, bytes: Vec<u8>) -> Result<(), SessionError> {
        let decoded = decode_image(&bytes)?;
        log::debug!("loaded {}x{} image", decoded.width, decoded.height);
        self.editor.load_image(bytes);
        Ok(())
    }

    pub(crate) fn press(&mut self, at: Point, parent: Bounds) -> bool {
        let target = classify_target(
            &self.editor.crop(),
            parent.to_relative(at),
            self.config.handle_reach,
        );
        self.editor.pointer_down(target, at, parent)
    }

    pub(crate) fn confirm_crop(&mut self, display: Size) -> Result<Vec<u8>, SessionError> {
        let crop = self.editor.pending_crop().ok_or(SessionError::NoPendingCrop)?;
        let source = self.editor.image().ok_or(SessionError::NoImage)?;
        let jpeg = extract_jpeg(source, &crop, display, self.config.jpeg_quality)?;
        self.editor.confirm(jpeg.clone());
        Ok(jpeg)
    }

    pub(crate) fn frame_box(&self) -> Option<JsCropFrame> {
        self.editor.is_cropping().then(|| JsCropFrame::from(self.editor.crop()))
    }

    pub(crate) fn crop_rect(&self) -> Rect {
        self.editor.crop()
    }
}
