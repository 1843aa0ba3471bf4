//! Cropframe WASM - WebAssembly bindings for the Cropframe crop editor
//!
//! This crate exposes cropframe-core to JavaScript/TypeScript applications.
//! Hosts either drive a stateful [`CropSession`] from their DOM events, or
//! call the stateless geometry functions from their own interaction loop.
//!
//! # Module Structure
//!
//! - `session` - `CropSession`, the editor state machine plus image history
//! - `geometry` - stateless create / resize / move / clamp functions
//! - `extract` - one-shot crop extraction to JPEG
//! - `types` - JS value conversion helpers
//! - `logger` - console logging and panic reporting
//!
//! # Usage
//!
//! ```typescript
//! import init, { CropSession } from '@cropframe/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new CropSession();
//! session.load_image(new Uint8Array(await file.arrayBuffer()));
//! session.start_crop(img.width, img.height);
//! ```

use wasm_bindgen::prelude::*;

mod extract;
mod geometry;
mod logger;
mod session;
mod types;

// Re-export public types
pub use extract::extract_crop;
pub use geometry::{
    check_crop_borders, get_moved_crop, get_new_crop, get_resized_crop, get_size, resize_handles,
};
pub use session::{CropSession, SessionError};
pub use types::JsCropFrame;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::set_panic_hook();
    logger::install(log::LevelFilter::Info);
}

/// Set the console log level (`"off"`, `"error"`, `"warn"`, `"info"`,
/// `"debug"` or `"trace"`). Returns `false` for an unknown name.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    match logger::parse_level(level) {
        Some(filter) => {
            logger::install(filter);
            true
        }
        None => false,
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
